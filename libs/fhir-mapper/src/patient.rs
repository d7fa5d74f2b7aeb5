//! Patient rows to FHIR `Patient`

use crate::rows::{present, PatientRow};
use crate::terminology::{extensions, identifiers, systems};
use nurture_models::common::{
    Address, Attachment, CodeableConcept, Coding, ContactPoint, Extension, HumanName, Identifier,
    Patient, PatientContact, Reference,
};
use serde::Serialize;
use serde_json::Value;

/// Outcome of [`map_patient`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MappedPatient {
    /// The `Patient` document stored on the row, exactly as stored
    Stored(Value),
    /// A `Patient` built from the row columns
    Mapped(Patient),
}

impl MappedPatient {
    pub fn to_value(&self) -> nurture_models::Result<Value> {
        match self {
            MappedPatient::Stored(resource) => Ok(resource.clone()),
            MappedPatient::Mapped(patient) => patient.to_value(),
        }
    }

    /// The column-mapped patient; `None` for a stored document
    pub fn as_mapped(&self) -> Option<&Patient> {
        match self {
            MappedPatient::Stored(_) => None,
            MappedPatient::Mapped(patient) => Some(patient),
        }
    }

    pub fn is_stored(&self) -> bool {
        matches!(self, MappedPatient::Stored(_))
    }
}

/// Map a patient row to a FHIR `Patient`.
///
/// A row carrying an already-mapped `Patient` document in `resource` yields
/// that document unchanged, members and `null`s included. Otherwise the
/// columns are mapped with [`map_patient_columns`].
pub fn map_patient(row: &PatientRow) -> MappedPatient {
    match stored_patient(row) {
        Some(resource) => {
            tracing::debug!("Using stored Patient resource as-is");
            MappedPatient::Stored(resource.clone())
        }
        None => MappedPatient::Mapped(map_patient_columns(row)),
    }
}

/// Build a `Patient` from the row columns. Absent columns leave the matching
/// elements out.
pub fn map_patient_columns(row: &PatientRow) -> Patient {
    let mut patient = Patient::new();
    patient.id = row.id.as_ref().map(ToString::to_string);
    patient.active = Some(true);
    patient.name = row.name.as_deref().and_then(official_name).map(|n| vec![n]);
    patient.birth_date = present(&row.date_of_birth).map(str::to_owned);

    if let Some(birth_time) = present(&row.birth_time) {
        patient.push_extension(Extension::date_time(extensions::BIRTH_TIME, birth_time));
    }
    if let Some(age) = row.age {
        patient.push_extension(Extension::integer(extensions::AGE, age));
    }

    patient.identifier = match list_override::<Identifier>(&row.identifiers) {
        Some(ids) => Some(ids),
        None => non_empty(assemble_identifiers(row)),
    };
    patient.telecom = match list_override::<ContactPoint>(&row.telecom) {
        Some(telecom) => Some(telecom),
        None => non_empty(assemble_telecom(row)),
    };

    patient.address = present(&row.address).map(|address| {
        vec![Address {
            use_: Some("home".to_string()),
            type_: Some("both".to_string()),
            text: Some(address.to_string()),
            line: Some(vec![address.to_string()]),
            ..Default::default()
        }]
    });
    patient.photo = present(&row.profile_picture).map(|url| {
        vec![Attachment {
            url: Some(url.to_string()),
            ..Default::default()
        }]
    });
    patient.contact = emergency_contact(row).map(|contact| vec![contact]);

    let insurance = [
        (extensions::PROVIDER_NAME, &row.provider_name),
        (extensions::INSURANCE_PROVIDER, &row.insurance_provider),
        (extensions::POLICY_NUMBER, &row.policy_number),
        (extensions::GROUP_NUMBER, &row.group_number),
    ];
    for (url, value) in insurance {
        if let Some(value) = present(value) {
            patient.push_extension(Extension::string(url, value));
        }
    }
    if let Some(user_id) = present(&row.user_id) {
        patient.push_extension(Extension::string(extensions::USER_ID, user_id));
    }
    if let Some(conception_date) = present(&row.conception_date) {
        patient.push_extension(Extension::date(extensions::CONCEPTION_DATE, conception_date));
    }

    patient.managing_organization = present(&row.provider_name).map(Reference::display);
    patient
}

/// Map a raw JSON row. `null` and non-object values yield `None`.
pub fn patient_from_value(value: &Value) -> Option<MappedPatient> {
    if !value.is_object() {
        if !value.is_null() {
            tracing::debug!("Ignoring non-object patient row");
        }
        return None;
    }
    match serde_json::from_value::<PatientRow>(value.clone()) {
        Ok(row) => Some(map_patient(&row)),
        Err(e) => {
            tracing::warn!(error = %e, "Patient row could not be decoded");
            None
        }
    }
}

/// Split a free-text name on whitespace: the last token is the family name
/// and the rest are given names; a lone token is a given name.
pub fn official_name(full_name: &str) -> Option<HumanName> {
    let mut parts: Vec<String> = full_name.split_whitespace().map(str::to_owned).collect();
    if parts.is_empty() {
        return None;
    }
    let family = if parts.len() > 1 { parts.pop() } else { None };

    Some(HumanName {
        use_: Some("official".to_string()),
        text: Some(full_name.to_string()),
        family,
        given: Some(parts),
        ..Default::default()
    })
}

fn stored_patient(row: &PatientRow) -> Option<&Value> {
    let resource = row.resource.as_ref()?;
    (resource.get("resourceType").and_then(Value::as_str) == Some("Patient")).then_some(resource)
}

fn assemble_identifiers(row: &PatientRow) -> Vec<Identifier> {
    let mut ids = Vec::new();

    if let Some(id) = &row.id {
        ids.push(Identifier {
            use_: Some("usual".to_string()),
            type_: Some(CodeableConcept::from_coding(Coding::new(
                systems::V2_0203,
                "MR",
            ))),
            system: Some(identifiers::PATIENT_ID.to_string()),
            value: Some(id.to_string()),
            assigner: Some(Reference::display(identifiers::LOCAL_ASSIGNER)),
            ..Default::default()
        });
    }
    if let Some(user_id) = present(&row.user_id) {
        ids.push(Identifier {
            system: Some(identifiers::USER_ID.to_string()),
            value: Some(user_id.to_string()),
            ..Default::default()
        });
    }
    if let Some(policy) = present(&row.policy_number) {
        ids.push(Identifier {
            use_: Some("secondary".to_string()),
            system: Some(identifiers::INSURANCE.to_string()),
            value: Some(policy.to_string()),
            assigner: present(&row.insurance_provider).map(Reference::display),
            ..Default::default()
        });
    }
    ids
}

fn assemble_telecom(row: &PatientRow) -> Vec<ContactPoint> {
    let mut telecom = Vec::new();
    if let Some(phone) = present(&row.phone) {
        telecom.push(ContactPoint::new("phone", phone, "home").ranked(1));
    }
    if let Some(email) = present(&row.email) {
        telecom.push(ContactPoint::new("email", email, "home").ranked(2));
    }
    telecom
}

fn emergency_contact(row: &PatientRow) -> Option<PatientContact> {
    let name = present(&row.emergency_contact_name);
    let phone = present(&row.emergency_contact_phone);
    let relationship = present(&row.emergency_contact_relationship);
    if name.is_none() && phone.is_none() && relationship.is_none() {
        return None;
    }

    Some(PatientContact {
        relationship: relationship.map(|r| vec![CodeableConcept::from_text(r)]),
        name: name.map(HumanName::from_text),
        telecom: phone.map(|p| vec![ContactPoint::new("phone", p, "mobile")]),
        ..Default::default()
    })
}

/// Pre-built list stored on the row, if it decodes
fn list_override<T: serde::de::DeserializeOwned>(value: &Option<Value>) -> Option<Vec<T>> {
    let value = value.as_ref()?;
    match serde_json::from_value(value.clone()) {
        Ok(list) => Some(list),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed pre-built list on patient row");
            None
        }
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
