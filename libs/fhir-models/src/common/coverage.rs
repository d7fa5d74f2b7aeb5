//! FHIR Coverage model

use super::complex::*;
use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// FHIR Coverage resource
///
/// Insurance or payment plan details for the patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    /// Resource type - always "Coverage"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// active | cancelled | draft | entered-in-error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Owner of the policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_holder: Option<Reference>,

    /// Subscriber to the policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<Reference>,

    /// Plan beneficiary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<Reference>,

    /// Issuer of the policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payor: Option<Vec<Reference>>,

    /// Additional coverage classifications
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub class: Option<Vec<CoverageClass>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_resource_type() -> String {
    "Coverage".to_string()
}

/// A classification of the coverage, such as the policy or group number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageClass {
    /// Type of class such as 'group' or 'plan'
    #[serde(rename = "type")]
    pub type_: CodeableConcept,

    /// Value associated with the type
    pub value: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CoverageClass {
    pub fn new(type_text: &str, value: impl Into<String>) -> Self {
        Self {
            type_: CodeableConcept::from_text(type_text),
            value: value.into(),
            name: None,
        }
    }
}

impl Default for Coverage {
    fn default() -> Self {
        Self::new()
    }
}

impl Coverage {
    pub fn new() -> Self {
        Self {
            resource_type: default_resource_type(),
            id: None,
            status: None,
            policy_holder: None,
            subscriber: None,
            beneficiary: None,
            payor: None,
            class: None,
            extra: Map::new(),
        }
    }

    /// Convert to JSON Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::from)
    }

    /// Value of the class whose type text matches, e.g. "Group Number"
    pub fn class_value(&self, type_text: &str) -> Option<&str> {
        self.class
            .as_deref()?
            .iter()
            .find(|c| c.type_.text.as_deref() == Some(type_text))
            .map(|c| c.value.as_str())
    }
}
