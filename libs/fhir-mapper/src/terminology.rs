//! Code systems and the static code tables the mappers draw from
//!
//! These tables are constants, not configuration.

use phf::phf_map;

/// Coding system URIs
pub mod systems {
    pub const LOINC: &str = "http://loinc.org";
    pub const SNOMED_CT: &str = "http://snomed.info/sct";
    pub const V2_0203: &str = "http://terminology.hl7.org/CodeSystem/v2-0203";
    pub const OBSERVATION_CATEGORY: &str =
        "http://terminology.hl7.org/CodeSystem/observation-category";
}

/// LOINC codes for the vitals recorded in `health_metrics`
pub mod loinc {
    pub const BODY_WEIGHT: &str = "29463-7";
    pub const HEART_RATE: &str = "8867-4";
    pub const BLOOD_GLUCOSE: &str = "15074-8";
    pub const BODY_TEMPERATURE: &str = "8310-5";
    pub const BLOOD_PRESSURE_PANEL: &str = "85354-9";
    pub const SYSTOLIC: &str = "8480-6";
    pub const DIASTOLIC: &str = "8462-4";
    pub const MEAN_BLOOD_PRESSURE: &str = "8478-0";
}

/// Identifier namespaces for patient identifiers
pub mod identifiers {
    pub const PATIENT_ID: &str = "urn:example:patient-id";
    pub const USER_ID: &str = "urn:example:user-id";
    pub const INSURANCE: &str = "urn:example:insurance";
    pub const LOCAL_ASSIGNER: &str = "Local System";
}

/// Extension URLs
pub mod extensions {
    pub const BIRTH_TIME: &str = "http://hl7.org/fhir/StructureDefinition/patient-birthTime";
    pub const AGE: &str = "http://example.org/fhir/StructureDefinition/age";
    pub const PROVIDER_NAME: &str = "http://example.org/fhir/StructureDefinition/provider-name";
    pub const INSURANCE_PROVIDER: &str =
        "http://example.org/fhir/StructureDefinition/insurance-provider";
    pub const POLICY_NUMBER: &str = "http://example.org/fhir/StructureDefinition/policy-number";
    pub const GROUP_NUMBER: &str = "http://example.org/fhir/StructureDefinition/group-number";
    pub const USER_ID: &str = "http://example.org/fhir/StructureDefinition/user-id";
    pub const CONCEPTION_DATE: &str =
        "http://example.org/fhir/StructureDefinition/conception-date";
    pub const TIME_OF_DAY: &str = "http://example.org/fhir/StructureDefinition/time-of-day";
}

/// A SNOMED CT concept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnomedCode {
    pub code: &'static str,
    pub display: &'static str,
}

/// Used for every symptom name missing from [`SYMPTOM_CODES`]
pub const FINDING_REPORTED_BY_SUBJECT: SnomedCode = SnomedCode {
    code: "418799008",
    display: "Finding reported by subject",
};

/// Known symptom names, matched case-sensitively
pub static SYMPTOM_CODES: phf::Map<&'static str, SnomedCode> = phf_map! {
    "Nausea" => SnomedCode { code: "422587007", display: "Nausea" },
    "Fatigue" => SnomedCode { code: "84229001", display: "Fatigue" },
    "Headache" => SnomedCode { code: "25064002", display: "Headache" },
    "Back Pain" => SnomedCode { code: "161891005", display: "Backache" },
    "Swelling" => SnomedCode { code: "442672001", display: "Swelling" },
    "Dizziness" => SnomedCode { code: "404640003", display: "Dizziness" },
    "Cramping" => SnomedCode { code: "55300003", display: "Cramp" },
    "Mood Changes" => SnomedCode { code: "18963009", display: "Mood swings" },
    "Heartburn" => SnomedCode { code: "16331000", display: "Heartburn" },
    "Insomnia" => SnomedCode { code: "193462001", display: "Insomnia" },
    "Constipation" => SnomedCode { code: "14760008", display: "Constipation" },
    "Shortness of Breath" => SnomedCode { code: "267036007", display: "Dyspnea" },
};

/// SNOMED CT code for a symptom name, falling back to
/// [`FINDING_REPORTED_BY_SUBJECT`]
pub fn symptom_code(name: &str) -> SnomedCode {
    match SYMPTOM_CODES.get(name) {
        Some(code) => *code,
        None => {
            tracing::debug!(symptom = name, "No SNOMED CT code for symptom, using fallback");
            FINDING_REPORTED_BY_SUBJECT
        }
    }
}
