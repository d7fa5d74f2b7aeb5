//! Version-agnostic FHIR models
//!
//! Only the elements the nurture mappers populate are modelled; everything
//! else is carried through the `extra` maps.

pub mod bundle;
pub mod complex;
pub mod coverage;
pub mod error;
pub mod observation;
pub mod patient;
pub mod related_person;

// Re-export commonly used types
pub use bundle::*;
pub use complex::*;
pub use coverage::*;
pub use error::{Error, Result};
pub use observation::*;
pub use patient::*;
pub use related_person::*;
