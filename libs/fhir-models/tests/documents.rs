use nurture_models::{
    Bundle, BundleType, CodeableConcept, Coding, Coverage, CoverageClass, Observation,
    ObservationComponent, ObservationStatus, Patient, Quantity, Reference, RelatedPerson,
};
use serde_json::json;

fn loinc(code: &str) -> CodeableConcept {
    CodeableConcept::from_coding(Coding::new("http://loinc.org", code))
}

#[test]
fn test_panel_observation_json() {
    let mut obs = Observation::new(loinc("85354-9"));
    obs.effective_date_time = Some("2024-01-01".to_string());
    obs.component = Some(vec![
        ObservationComponent::new(loinc("8480-6"), Some(Quantity::new(120, "mmHg"))),
        ObservationComponent::new(loinc("8462-4"), Some(Quantity::maybe(None, "mmHg"))),
    ]);

    let json = obs.to_value().unwrap();
    assert_eq!(
        json,
        json!({
            "resourceType": "Observation",
            "code": { "coding": [{ "system": "http://loinc.org", "code": "85354-9" }] },
            "effectiveDateTime": "2024-01-01",
            "component": [
                {
                    "code": { "coding": [{ "system": "http://loinc.org", "code": "8480-6" }] },
                    "valueQuantity": { "value": 120, "unit": "mmHg" }
                },
                {
                    "code": { "coding": [{ "system": "http://loinc.org", "code": "8462-4" }] },
                    "valueQuantity": { "unit": "mmHg" }
                }
            ]
        })
    );
}

#[test]
fn test_reported_quantity_writes_null_value() {
    let missing = serde_json::to_value(Quantity::reported(None, "mmHg")).unwrap();
    assert_eq!(missing, json!({ "unit": "mmHg", "value": null }));
    assert_eq!(missing.get("value"), Some(&serde_json::Value::Null));

    let present = serde_json::to_value(Quantity::reported(Some(80.into()), "mmHg")).unwrap();
    assert_eq!(present, json!({ "value": 80, "unit": "mmHg" }));
}

#[test]
fn test_decimal_quantity_keeps_fraction() {
    let json = json!({
        "resourceType": "Observation",
        "status": "final",
        "code": { "text": "Temperature" },
        "valueQuantity": { "value": 98.6, "unit": "°F" }
    });

    let obs: Observation = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(obs.status, Some(ObservationStatus::Final));
    assert_eq!(obs.value_quantity.as_ref().unwrap().as_f64(), Some(98.6));
    assert_eq!(obs.to_value().unwrap(), json);
}

#[test]
fn test_profile_bundle() {
    let mut patient = Patient::new();
    patient.id = Some("1".to_string());

    let person = RelatedPerson::new(Reference::to("Patient", 1));

    let mut coverage = Coverage::new();
    coverage.status = Some("active".to_string());
    coverage.class = Some(vec![CoverageClass::new("Policy Number", "P-100")]);

    let mut bundle = Bundle::new(BundleType::Collection);
    bundle.add_resource(&patient).unwrap();
    bundle.add_resource(&person).unwrap();
    bundle.add_resource(&coverage).unwrap();

    let json = bundle.to_value().unwrap();
    assert_eq!(json["type"], "collection");
    assert_eq!(json["entry"][0]["fullUrl"], "Patient/1");
    assert!(json["entry"][1].get("fullUrl").is_none());
    assert_eq!(json["entry"][1]["resource"]["patient"]["reference"], "Patient/1");
    assert_eq!(json["entry"][2]["resource"]["class"][0]["value"], "P-100");

    let parsed: Bundle = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, bundle);
}

#[test]
fn test_bundle_rejects_non_object_resources() {
    let mut bundle = Bundle::new(BundleType::Collection);
    assert!(bundle.add_resource(&"not a resource").is_err());
    assert_eq!(bundle.entry_count(), 0);
}
