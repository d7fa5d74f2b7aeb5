//! All documents the profile page shows for one patient row

use crate::coverage::map_insurance;
use crate::error::Result;
use crate::patient::{map_patient, MappedPatient};
use crate::related_person::map_emergency_contact;
use crate::rows::PatientRow;
use nurture_models::common::{Bundle, BundleType, Coverage, RelatedPerson};
use serde::Serialize;
use serde_json::Value;

/// The `Patient` plus the optional emergency contact and insurance documents
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocuments {
    pub patient: MappedPatient,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<RelatedPerson>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Coverage>,
}

impl ProfileDocuments {
    /// Collection bundle of the documents present, patient first
    pub fn to_bundle(&self) -> Result<Bundle> {
        let mut bundle = Bundle::new(BundleType::Collection);
        bundle.add_resource(&self.patient)?;
        if let Some(person) = &self.emergency_contact {
            bundle.add_resource(person)?;
        }
        if let Some(coverage) = &self.coverage {
            bundle.add_resource(coverage)?;
        }
        Ok(bundle)
    }
}

pub fn map_profile(row: &PatientRow) -> ProfileDocuments {
    ProfileDocuments {
        patient: map_patient(row),
        emergency_contact: map_emergency_contact(row),
        coverage: map_insurance(row),
    }
}

/// Map a raw JSON row; `null` and non-object values yield `None`
pub fn profile_from_value(value: &Value) -> Option<ProfileDocuments> {
    if !value.is_object() {
        return None;
    }
    match serde_json::from_value::<PatientRow>(value.clone()) {
        Ok(row) => Some(map_profile(&row)),
        Err(e) => {
            tracing::warn!(error = %e, "Patient row could not be decoded");
            None
        }
    }
}
