//! FHIR resource documents
//!
//! Strongly-typed Rust structures for the FHIR resources the nurture mappers
//! emit: `Patient`, `Observation`, `RelatedPerson`, `Coverage` and the
//! `Bundle` used to ship them together.
//!
//! # Design Philosophy
//!
//! - **Omission over null**: every optional element is an `Option` and is left
//!   out of the serialized JSON when absent; `Quantity::reported` is the one
//!   way to ask for an explicit `null` value
//! - **Extensible**: `extra` fields capture properties the models do not name,
//!   so documents read from elsewhere survive a round trip
//! - **Compatible**: `to_value` bridges to `serde_json::Value`; documents
//!   read back with `serde_json::from_value`
//!
//! # Example
//!
//! ```rust
//! use nurture_models::common::{CodeableConcept, Coding, Observation, Quantity};
//!
//! let mut obs = Observation::new(CodeableConcept::from_coding(Coding::new(
//!     "http://loinc.org",
//!     "29463-7",
//! )));
//! obs.value_quantity = Some(Quantity::new(70, "kg"));
//!
//! let json = obs.to_value().unwrap();
//! assert_eq!(json["resourceType"], "Observation");
//! assert_eq!(json["code"]["coding"][0]["code"], "29463-7");
//! assert!(json.get("status").is_none());
//! ```

pub mod common;

// Re-export commonly used types
pub use common::*;
