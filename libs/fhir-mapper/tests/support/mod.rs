#![allow(dead_code)]

use nurture_mapper::{HealthMetricRow, PatientRow, SymptomLogRow};
use serde_json::{json, Value};

pub fn patient_row(value: Value) -> PatientRow {
    serde_json::from_value(value).expect("patient row fixture")
}

pub fn metric_row(value: Value) -> HealthMetricRow {
    serde_json::from_value(value).expect("health metric row fixture")
}

pub fn symptom_row(value: Value) -> SymptomLogRow {
    serde_json::from_value(value).expect("symptom log row fixture")
}

/// A row with every `patients` column filled in
pub fn full_patient_row() -> Value {
    json!({
        "id": 1,
        "name": "Jane Marie Doe",
        "dateOfBirth": "1990-01-01",
        "birthTime": "1990-01-01T04:30:00Z",
        "age": 34,
        "phone": "555-1234",
        "email": "jane@example.com",
        "address": "1 Main St, Springfield",
        "profilePicture": "https://example.com/jane.png",
        "emergencyContactName": "John Doe",
        "emergencyContactPhone": "555-9876",
        "emergencyContactRelationship": "Spouse",
        "providerName": "Dr. Rivera",
        "insuranceProvider": "Acme Health",
        "policyNumber": "P-100",
        "groupNumber": "G-200",
        "conception_date": "2024-03-01",
        "user_id": "a1b2c3"
    })
}

/// Values used for `name` in generated rows
pub fn clean_tokens(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
        .filter(|t| !t.is_empty())
        .collect()
}
