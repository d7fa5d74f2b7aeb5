//! Emergency contact columns to a standalone `RelatedPerson`

use crate::rows::{present, PatientRow};
use nurture_models::common::{CodeableConcept, ContactPoint, HumanName, Reference, RelatedPerson};

/// Map the emergency-contact columns of a patient row.
///
/// `None` when the row names no emergency contact at all. The same details
/// also appear in `Patient.contact`.
pub fn map_emergency_contact(row: &PatientRow) -> Option<RelatedPerson> {
    let name = present(&row.emergency_contact_name);
    let phone = present(&row.emergency_contact_phone);
    let relationship = present(&row.emergency_contact_relationship);
    if name.is_none() && phone.is_none() && relationship.is_none() {
        return None;
    }

    let mut person = RelatedPerson::new(patient_reference(row));
    person.relationship = relationship.map(|r| vec![CodeableConcept::from_text(r)]);
    person.name = name.map(|n| vec![HumanName::from_text(n)]);
    person.telecom = phone.map(|p| vec![ContactPoint::new("phone", p, "mobile")]);
    Some(person)
}

pub(crate) fn patient_reference(row: &PatientRow) -> Reference {
    match &row.id {
        Some(id) => Reference::to("Patient", id),
        None => Reference::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> PatientRow {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_no_contact_columns() {
        assert!(map_emergency_contact(&row(json!({ "id": 1, "name": "Jane Doe" }))).is_none());
        assert!(map_emergency_contact(&row(json!({ "emergencyContactName": " " }))).is_none());
    }

    #[test]
    fn test_full_contact() {
        let person = map_emergency_contact(&row(json!({
            "id": 12,
            "emergencyContactName": "John Doe",
            "emergencyContactPhone": "555-9876",
            "emergencyContactRelationship": "Spouse"
        })))
        .unwrap();

        let json = person.to_value().unwrap();
        assert_eq!(json["resourceType"], "RelatedPerson");
        assert_eq!(json["patient"]["reference"], "Patient/12");
        assert_eq!(json["relationship"][0]["text"], "Spouse");
        assert_eq!(json["name"][0]["text"], "John Doe");
        assert_eq!(json["telecom"][0]["value"], "555-9876");
        assert_eq!(json["telecom"][0]["use"], "mobile");
    }

    #[test]
    fn test_partial_contact_omits_missing_parts() {
        let person =
            map_emergency_contact(&row(json!({ "emergencyContactPhone": "555-0000" }))).unwrap();
        assert!(person.name.is_none());
        assert!(person.relationship.is_none());
        assert!(person.patient.reference.is_none());
        assert_eq!(person.telecom.unwrap().len(), 1);
    }
}
