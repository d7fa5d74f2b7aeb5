//! Insurance columns to a `Coverage`

use crate::related_person::patient_reference;
use crate::rows::{present, PatientRow};
use nurture_models::common::{Coverage, CoverageClass, Reference};

pub const POLICY_NUMBER_CLASS: &str = "Policy Number";
pub const GROUP_NUMBER_CLASS: &str = "Group Number";

/// Map the insurance columns of a patient row; `None` without any of
/// provider, policy number or group number.
pub fn map_insurance(row: &PatientRow) -> Option<Coverage> {
    let provider = present(&row.insurance_provider);
    let policy = present(&row.policy_number);
    let group = present(&row.group_number);
    if provider.is_none() && policy.is_none() && group.is_none() {
        return None;
    }

    let patient = patient_reference(row);
    let mut coverage = Coverage::new();
    coverage.status = Some("active".to_string());
    coverage.policy_holder = Some(patient.clone());
    coverage.subscriber = Some(patient.clone());
    coverage.beneficiary = Some(patient);
    coverage.payor = provider.map(|p| vec![Reference::display(p)]);

    let classes: Vec<CoverageClass> = [(POLICY_NUMBER_CLASS, policy), (GROUP_NUMBER_CLASS, group)]
        .into_iter()
        .filter_map(|(kind, value)| value.map(|v| CoverageClass::new(kind, v)))
        .collect();
    if !classes.is_empty() {
        coverage.class = Some(classes);
    }

    Some(coverage)
}
