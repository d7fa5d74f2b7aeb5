//! FHIR Observation model
//!
//! Covers both single-valued observations (weight, symptom severity) and
//! panels whose values live in `component` (blood pressure).

use super::complex::*;
use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// FHIR Observation resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Resource type - always "Observation"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    /// Logical id of this artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// registered | preliminary | final | amended | ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ObservationStatus>,

    /// Classification of type of observation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// Type of observation (code / type)
    pub code: CodeableConcept,

    /// Who and/or what the observation is about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// Clinically relevant time for the observation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date_time: Option<String>,

    /// Actual result as a quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_quantity: Option<Quantity>,

    /// Actual result as an integer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_integer: Option<i64>,

    /// Actual result as text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,

    /// Comments about the observation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Component results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<Vec<ObservationComponent>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_resource_type() -> String {
    "Observation".to_string()
}

/// Status of an Observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObservationStatus {
    Registered,
    Preliminary,
    Final,
    Amended,
    Corrected,
    Cancelled,
    EnteredInError,
    Unknown,
}

/// Component result of a panel observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationComponent {
    /// Type of component observation (code / type)
    pub code: CodeableConcept,

    /// Actual component result as a quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_quantity: Option<Quantity>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ObservationComponent {
    pub fn new(code: CodeableConcept, value_quantity: Option<Quantity>) -> Self {
        Self {
            code,
            value_quantity,
            extra: Map::new(),
        }
    }
}

impl Observation {
    /// Create an Observation with only its code set
    pub fn new(code: CodeableConcept) -> Self {
        Self {
            resource_type: default_resource_type(),
            id: None,
            extension: None,
            status: None,
            category: None,
            code,
            subject: None,
            effective_date_time: None,
            value_quantity: None,
            value_integer: None,
            value_string: None,
            note: None,
            component: None,
            extra: Map::new(),
        }
    }

    /// Convert to JSON Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::from)
    }

    /// Code of the first coding
    pub fn primary_code(&self) -> Option<&str> {
        self.code.primary_code()
    }

    /// Get components as a slice
    pub fn components(&self) -> &[ObservationComponent] {
        self.component.as_deref().unwrap_or(&[])
    }

    /// First component whose primary code matches
    pub fn component_by_code(&self, code: &str) -> Option<&ObservationComponent> {
        self.components()
            .iter()
            .find(|c| c.code.primary_code() == Some(code))
    }

    /// Append an extension, creating the list on first use
    pub fn push_extension(&mut self, extension: Extension) {
        self.extension.get_or_insert_with(Vec::new).push(extension);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loinc(code: &str) -> CodeableConcept {
        CodeableConcept::from_coding(Coding::new("http://loinc.org", code))
    }

    #[test]
    fn test_serialize_panel_with_components() {
        let mut obs = Observation::new(loinc("85354-9"));
        obs.effective_date_time = Some("2024-01-01".to_string());
        obs.component = Some(vec![
            ObservationComponent::new(loinc("8480-6"), Some(Quantity::new(120, "mmHg"))),
            ObservationComponent::new(loinc("8462-4"), Some(Quantity::maybe(None, "mmHg"))),
        ]);

        let json = obs.to_value().unwrap();
        assert_eq!(json["component"][0]["valueQuantity"]["value"], 120);
        assert!(json["component"][1]["valueQuantity"].get("value").is_none());
        assert_eq!(json["component"][1]["valueQuantity"]["unit"], "mmHg");
    }

    #[test]
    fn test_component_by_code() {
        let mut obs = Observation::new(loinc("85354-9"));
        obs.component = Some(vec![
            ObservationComponent::new(loinc("8480-6"), Some(Quantity::new(118, "mmHg"))),
            ObservationComponent::new(loinc("8462-4"), Some(Quantity::new(76, "mmHg"))),
        ]);

        let diastolic = obs.component_by_code("8462-4").unwrap();
        assert_eq!(
            diastolic.value_quantity.as_ref().and_then(Quantity::as_f64),
            Some(76.0)
        );
        assert!(obs.component_by_code("8478-0").is_none());
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let mut obs = Observation::new(CodeableConcept::from_text("Nausea"));
        obs.status = Some(ObservationStatus::EnteredInError);
        let json = obs.to_value().unwrap();
        assert_eq!(json["status"], "entered-in-error");
    }

    #[test]
    fn test_deserialize_symptom_observation() {
        let obs: Observation = serde_json::from_value(json!({
            "resourceType": "Observation",
            "status": "final",
            "code": { "coding": [{ "system": "http://snomed.info/sct", "code": "25064002" }], "text": "Headache" },
            "valueInteger": 4,
            "note": [{ "text": "after lunch" }]
        }))
        .unwrap();

        assert_eq!(obs.status, Some(ObservationStatus::Final));
        assert_eq!(obs.primary_code(), Some("25064002"));
        assert_eq!(obs.value_integer, Some(4));
        assert_eq!(obs.note.unwrap()[0].text, "after lunch");
    }
}
