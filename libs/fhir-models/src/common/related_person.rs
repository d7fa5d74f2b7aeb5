//! FHIR RelatedPerson model

use super::complex::*;
use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// FHIR RelatedPerson resource
///
/// A person with a personal relationship to the patient, such as an
/// emergency contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPerson {
    /// Resource type - always "RelatedPerson"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The patient this person is related to
    pub patient: Reference,

    /// The nature of the relationship
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Vec<CodeableConcept>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<HumanName>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_resource_type() -> String {
    "RelatedPerson".to_string()
}

impl RelatedPerson {
    pub fn new(patient: Reference) -> Self {
        Self {
            resource_type: default_resource_type(),
            id: None,
            patient,
            relationship: None,
            name: None,
            telecom: None,
            extra: Map::new(),
        }
    }

    /// Convert to JSON Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::from)
    }
}
