//! Maternal-health rows to FHIR documents
//!
//! Maps rows of the `patients`, `health_metrics` and `symptom_logs` tables to
//! FHIR `Patient`, `Observation`, `RelatedPerson` and `Coverage` documents.
//!
//! Mapping never fails: a missing or mistyped column leaves the matching
//! element out, a malformed blood-pressure reading gives `null` component
//! values and an unknown symptom gets a generic SNOMED CT code. A row that
//! already stores a `Patient` document is passed through untouched. Only
//! turning raw JSON into rows can return an [`Error`].
//!
//! # Example
//!
//! ```rust
//! use nurture_mapper::{map_health_metrics, HealthMetricRow};
//! use serde_json::json;
//!
//! let row: HealthMetricRow = serde_json::from_value(json!({
//!     "created_at": "2024-01-01",
//!     "weight": 70,
//!     "blood_pressure": "120/80"
//! }))
//! .unwrap();
//!
//! let observations = map_health_metrics(&row);
//! assert_eq!(observations.len(), 6);
//!
//! let panel = &observations[4];
//! let systolic = panel.component_by_code("8480-6").unwrap();
//! assert_eq!(systolic.value_quantity.as_ref().unwrap().as_f64(), Some(120.0));
//! ```

pub mod coverage;
pub mod error;
pub mod patient;
pub mod profile;
pub mod related_person;
pub mod rows;
pub mod symptoms;
pub mod terminology;
pub mod vitals;

pub use coverage::map_insurance;
pub use error::{Error, Result};
pub use patient::{
    map_patient, map_patient_columns, official_name, patient_from_value, MappedPatient,
};
pub use profile::{map_profile, profile_from_value, ProfileDocuments};
pub use related_person::map_emergency_contact;
pub use rows::{rows_from_value, HealthMetricRow, PatientRow, RowId, SymptomLogRow, TimeOfDay};
pub use symptoms::{map_symptom_log, map_symptom_logs, symptom_logs_from_value};
pub use vitals::{
    health_metrics_from_value, map_health_metric_rows, map_health_metrics, BloodPressure, Vital,
};
