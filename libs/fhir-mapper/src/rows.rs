//! Source rows as returned by the data store
//!
//! Field names on the wire are the table's column names. Every column is
//! optional, and a column holding a value of the wrong JSON type decodes as
//! missing instead of failing the whole row.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Primary key of a row; the data store hands out integers, imports may use text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(id) => write!(f, "{id}"),
            RowId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RowId {
    fn from(id: i64) -> Self {
        RowId::Int(id)
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        RowId::Text(id.to_string())
    }
}

/// Row of the `patients` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRow {
    #[serde(default, deserialize_with = "lenient::any")]
    pub id: Option<RowId>,

    /// Full name as a single string
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,

    #[serde(rename = "dateOfBirth", default, deserialize_with = "lenient::text")]
    pub date_of_birth: Option<String>,

    #[serde(rename = "birthTime", default, deserialize_with = "lenient::text")]
    pub birth_time: Option<String>,

    #[serde(default, deserialize_with = "lenient::any")]
    pub age: Option<i64>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,

    /// Postal address as a single string
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: Option<String>,

    #[serde(rename = "profilePicture", default, deserialize_with = "lenient::text")]
    pub profile_picture: Option<String>,

    #[serde(rename = "emergencyContactName", default, deserialize_with = "lenient::text")]
    pub emergency_contact_name: Option<String>,

    #[serde(rename = "emergencyContactPhone", default, deserialize_with = "lenient::text")]
    pub emergency_contact_phone: Option<String>,

    #[serde(
        rename = "emergencyContactRelationship",
        default,
        deserialize_with = "lenient::text"
    )]
    pub emergency_contact_relationship: Option<String>,

    #[serde(rename = "providerName", default, deserialize_with = "lenient::text")]
    pub provider_name: Option<String>,

    #[serde(rename = "insuranceProvider", default, deserialize_with = "lenient::text")]
    pub insurance_provider: Option<String>,

    #[serde(rename = "policyNumber", default, deserialize_with = "lenient::text")]
    pub policy_number: Option<String>,

    #[serde(rename = "groupNumber", default, deserialize_with = "lenient::text")]
    pub group_number: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub conception_date: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub user_id: Option<String>,

    /// Pre-built FHIR identifiers; replace the assembled list when present
    #[serde(default, deserialize_with = "lenient::any")]
    pub identifiers: Option<Value>,

    /// Pre-built FHIR contact points; replace the assembled list when present
    #[serde(default, deserialize_with = "lenient::any")]
    pub telecom: Option<Value>,

    /// Already-mapped FHIR document stored alongside the row
    #[serde(default, deserialize_with = "lenient::any")]
    pub resource: Option<Value>,
}

/// Row of the `health_metrics` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthMetricRow {
    #[serde(default, deserialize_with = "lenient::any")]
    pub id: Option<RowId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: Option<String>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub weight: Option<Number>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub heart_rate: Option<Number>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub blood_sugar: Option<Number>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub temperature: Option<Number>,

    /// Formatted as `"systolic/diastolic"`
    #[serde(default, deserialize_with = "lenient::text")]
    pub blood_pressure: Option<String>,
}

/// Row of the `symptom_logs` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymptomLogRow {
    #[serde(default, deserialize_with = "lenient::any")]
    pub id: Option<RowId>,

    #[serde(default, deserialize_with = "lenient::any")]
    pub patient_id: Option<RowId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub symptom_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub symptom_name: Option<String>,

    /// 1 (mild) to 5 (severe); not validated
    #[serde(default, deserialize_with = "lenient::any")]
    pub severity: Option<i64>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub entry_date: Option<String>,

    #[serde(default, deserialize_with = "lenient::any")]
    pub time_of_day: Option<TimeOfDay>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: Option<String>,
}

/// Time-of-day tags: normally a list (Morning, Afternoon, Evening, Night),
/// older rows hold a single string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeOfDay {
    Tags(Vec<String>),
    Text(String),
}

/// Non-blank text, the presence test every mapper applies to text columns
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Decode rows from a `select *` result: an array of objects, a single
/// object (`.single()` queries) or `null` (no rows)
pub fn rows_from_value<T: DeserializeOwned>(value: &Value) -> Result<Vec<T>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(_) => Ok(vec![serde_json::from_value(value.clone())?]),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                if !item.is_object() {
                    return Err(Error::InvalidRow { index });
                }
                serde_json::from_value(item.clone()).map_err(Error::from)
            })
            .collect(),
        Value::Bool(_) => Err(Error::UnexpectedShape("a boolean")),
        Value::Number(_) => Err(Error::UnexpectedShape("a number")),
        Value::String(_) => Err(Error::UnexpectedShape("a string")),
    }
}

mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::{Number, Value};

    /// Any type; a mismatch decodes as `None`
    pub fn any<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(serde_json::from_value(value).ok())
    }

    /// Text column; numbers are rendered (numeric policy and phone columns)
    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    /// Numeric column; numeric strings are parsed
    pub fn number<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => Some(n),
            Value::String(s) => s.trim().parse::<Number>().ok(),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patient_row_uses_column_names() {
        let row: PatientRow = serde_json::from_value(json!({
            "id": 1,
            "name": "Jane Doe",
            "dateOfBirth": "1990-01-01",
            "conception_date": "2024-03-01",
            "user_id": "a1b2"
        }))
        .unwrap();

        assert_eq!(row.id, Some(RowId::Int(1)));
        assert_eq!(row.date_of_birth.as_deref(), Some("1990-01-01"));
        assert_eq!(row.conception_date.as_deref(), Some("2024-03-01"));
        assert_eq!(row.user_id.as_deref(), Some("a1b2"));
        assert!(row.email.is_none());
    }

    #[test]
    fn test_mistyped_columns_decode_as_missing() {
        let row: PatientRow = serde_json::from_value(json!({
            "age": "thirty",
            "phone": 5551234,
            "email": false,
            "policyNumber": 99812
        }))
        .unwrap();

        assert!(row.age.is_none());
        assert_eq!(row.phone.as_deref(), Some("5551234"));
        assert!(row.email.is_none());
        assert_eq!(row.policy_number.as_deref(), Some("99812"));
    }

    #[test]
    fn test_health_metric_numbers_keep_their_shape() {
        let row: HealthMetricRow = serde_json::from_value(json!({
            "weight": 70,
            "temperature": 98.6,
            "heart_rate": "82",
            "blood_sugar": null
        }))
        .unwrap();

        assert_eq!(row.weight, Some(Number::from(70)));
        assert_eq!(row.temperature.as_ref().and_then(Number::as_f64), Some(98.6));
        assert_eq!(row.heart_rate, Some(Number::from(82)));
        assert!(row.blood_sugar.is_none());
    }

    #[test]
    fn test_time_of_day_accepts_list_or_text() {
        let tags: SymptomLogRow =
            serde_json::from_value(json!({ "time_of_day": ["Morning", "Night"] })).unwrap();
        assert_eq!(
            tags.time_of_day,
            Some(TimeOfDay::Tags(vec!["Morning".into(), "Night".into()]))
        );

        let text: SymptomLogRow =
            serde_json::from_value(json!({ "time_of_day": "Evening" })).unwrap();
        assert_eq!(text.time_of_day, Some(TimeOfDay::Text("Evening".into())));
    }

    #[test]
    fn test_rows_from_value_shapes() {
        let rows: Vec<HealthMetricRow> =
            rows_from_value(&json!([{ "weight": 70 }, { "weight": 71 }])).unwrap();
        assert_eq!(rows.len(), 2);

        let single: Vec<PatientRow> = rows_from_value(&json!({ "id": 1 })).unwrap();
        assert_eq!(single.len(), 1);

        let none: Vec<PatientRow> = rows_from_value(&Value::Null).unwrap();
        assert!(none.is_empty());

        let err = rows_from_value::<PatientRow>(&json!([{ "id": 1 }, 7])).unwrap_err();
        assert!(matches!(err, Error::InvalidRow { index: 1 }));

        let err = rows_from_value::<PatientRow>(&json!("patients")).unwrap_err();
        assert!(matches!(err, Error::UnexpectedShape("a string")));
    }

    #[test]
    fn test_row_id_display() {
        assert_eq!(RowId::Int(42).to_string(), "42");
        assert_eq!(RowId::from("abc").to_string(), "abc");
    }
}
