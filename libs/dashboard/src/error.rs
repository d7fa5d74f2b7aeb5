use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid date '{0}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate(String),

    #[error("Unknown calendar view '{0}': expected 'week' or 'month'")]
    UnknownView(String),
}

pub type Result<T> = std::result::Result<T, Error>;
