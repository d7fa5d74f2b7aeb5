//! FHIR complex types and shared data structures
//!
//! Data types reused across the resources in this crate. No validation - just
//! data representation.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Number, Value};

/// FHIR Extension
///
/// The `value[x]` element is kept as a flattened JSON object so any value
/// type survives deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    pub url: String,

    #[serde(flatten)]
    pub value: Value,
}

impl Extension {
    pub fn string(url: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(url, "valueString", Value::String(value.into()))
    }

    pub fn integer(url: impl Into<String>, value: i64) -> Self {
        Self::with_value(url, "valueInteger", Value::from(value))
    }

    pub fn date(url: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(url, "valueDate", Value::String(value.into()))
    }

    pub fn date_time(url: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(url, "valueDateTime", Value::String(value.into()))
    }

    fn with_value(url: impl Into<String>, key: &str, value: Value) -> Self {
        Self {
            url: url.into(),
            value: json!({ key: value }),
        }
    }

    /// Value of a `valueString` extension
    pub fn value_string(&self) -> Option<&str> {
        self.value.get("valueString").and_then(Value::as_str)
    }

    /// Value of a `valueInteger` extension
    pub fn value_integer(&self) -> Option<i64> {
        self.value.get("valueInteger").and_then(Value::as_i64)
    }
}

/// Coding - a reference to a code defined by a terminology system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Coding {
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
            ..Default::default()
        }
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}

/// CodeableConcept - a set of codings plus an optional plain-text rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeableConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coding: Option<Vec<Coding>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CodeableConcept {
    pub fn from_coding(coding: Coding) -> Self {
        Self {
            coding: Some(vec![coding]),
            ..Default::default()
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Code of the first coding, the one dashboards key on
    pub fn primary_code(&self) -> Option<&str> {
        self.coding
            .as_deref()
            .and_then(|codings| codings.first())
            .and_then(|coding| coding.code.as_deref())
    }
}

/// Reference to another resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Reference {
    /// Literal reference such as `Patient/1`
    pub fn to(resource_type: &str, id: impl std::fmt::Display) -> Self {
        Self {
            reference: Some(format!("{resource_type}/{id}")),
            ..Default::default()
        }
    }

    pub fn display(display: impl Into<String>) -> Self {
        Self {
            display: Some(display.into()),
            ..Default::default()
        }
    }
}

/// Identifier - a business identifier for a resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>, // usual | official | temp | secondary | old

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigner: Option<Reference>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Contact point (phone, email, etc.)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>, // phone | fax | email | pager | url | sms | other

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>, // home | work | temp | old | mobile

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContactPoint {
    pub fn new(system: &str, value: impl Into<String>, use_: &str) -> Self {
        Self {
            system: Some(system.to_string()),
            value: Some(value.into()),
            use_: Some(use_.to_string()),
            ..Default::default()
        }
    }

    pub fn ranked(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }
}

/// HumanName - a person's name split into parts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HumanName {
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>, // usual | official | temp | nickname | anonymous | old | maiden

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<Vec<String>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HumanName {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

/// Address - postal address, kept as free text plus lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>, // home | work | temp | old | billing

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>, // postal | physical | both

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<String>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Attachment - content referenced by URL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Annotation - a text note
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Annotation {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Quantity - a measured amount
///
/// `value` keeps the JSON number as given, so integer readings stay integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Quantity {
    pub fn new(value: impl Into<Number>, unit: impl Into<String>) -> Self {
        Self::maybe(Some(value.into()), unit)
    }

    /// Quantity whose value may be missing; the unit is always recorded
    pub fn maybe(value: Option<Number>, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: Some(unit.into()),
            ..Default::default()
        }
    }

    /// Like [`Quantity::maybe`], but a missing value is written out as
    /// `"value": null` instead of being left out
    pub fn reported(value: Option<Number>, unit: impl Into<String>) -> Self {
        let mut quantity = Self::maybe(value, unit);
        if quantity.value.is_none() {
            quantity.extra.insert("value".to_string(), Value::Null);
        }
        quantity
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_ref().and_then(Number::as_f64)
    }
}
