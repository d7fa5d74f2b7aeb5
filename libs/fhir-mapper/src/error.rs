//! Error types for row decoding
//!
//! The mappers themselves never fail; these errors only come from turning
//! raw JSON into rows.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Expected a JSON object or an array of objects, got {0}")]
    UnexpectedShape(&'static str),

    #[error("Row {index} is not a JSON object")]
    InvalidRow { index: usize },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Model error: {0}")]
    Model(#[from] nurture_models::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
