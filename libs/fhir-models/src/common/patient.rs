//! FHIR Patient model

use super::complex::*;
use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// FHIR Patient resource
///
/// Demographics and administrative information about the person receiving
/// care.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Resource type - always "Patient"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    /// Logical id of this artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// An identifier for this patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Whether this patient's record is in active use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// A name associated with the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<HumanName>>,

    /// A contact detail for the individual
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// The date of birth for the individual
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    /// An address for the individual
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Vec<Address>>,

    /// Image of the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<Attachment>>,

    /// A contact party (e.g. guardian, partner, friend) for the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<PatientContact>>,

    /// Organization that is the custodian of the patient record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_organization: Option<Reference>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_resource_type() -> String {
    "Patient".to_string()
}

/// A contact party for the patient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientContact {
    /// The kind of relationship
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Vec<CodeableConcept>>,

    /// A name associated with the contact person
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<HumanName>,

    /// A contact detail for the person
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Patient {
    fn default() -> Self {
        Self::new()
    }
}

impl Patient {
    /// Create an empty Patient
    pub fn new() -> Self {
        Self {
            resource_type: default_resource_type(),
            id: None,
            extension: None,
            identifier: None,
            active: None,
            name: None,
            telecom: None,
            birth_date: None,
            address: None,
            photo: None,
            contact: None,
            managing_organization: None,
            extra: Map::new(),
        }
    }

    /// Convert to JSON Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::from)
    }

    /// Append an extension, creating the list on first use
    pub fn push_extension(&mut self, extension: Extension) {
        self.extension.get_or_insert_with(Vec::new).push(extension);
    }

    /// The official name, falling back to the first one
    pub fn official_name(&self) -> Option<&HumanName> {
        let names = self.name.as_deref()?;
        names
            .iter()
            .find(|n| n.use_.as_deref() == Some("official"))
            .or_else(|| names.first())
    }
}
