//! Symptom-log rows to `Observation`s

use crate::rows::{present, SymptomLogRow, TimeOfDay};
use crate::terminology::{extensions, symptom_code, systems};
use nurture_models::common::{
    Annotation, CodeableConcept, Coding, Extension, Observation, ObservationStatus, Reference,
};
use serde_json::Value;

/// Map one symptom-log entry to an `Observation`.
///
/// Severity goes into `valueInteger` exactly as logged; the 1 to 5 scale is
/// not enforced here.
pub fn map_symptom_log(row: &SymptomLogRow) -> Observation {
    let name = present(&row.symptom_name);
    let snomed = symptom_code(name.unwrap_or_default());

    let mut code = CodeableConcept::from_coding(
        Coding::new(systems::SNOMED_CT, snomed.code).with_display(snomed.display),
    );
    code.text = name.map(str::to_owned);

    let mut obs = Observation::new(code);
    obs.id = row.id.as_ref().map(ToString::to_string);
    obs.status = Some(ObservationStatus::Final);
    obs.category = Some(vec![survey_category()]);
    obs.subject = row.patient_id.as_ref().map(|id| Reference::to("Patient", id));
    obs.effective_date_time = present(&row.entry_date).map(str::to_owned);
    obs.value_integer = row.severity;

    if let Some(notes) = present(&row.notes) {
        obs.note = Some(vec![Annotation::new(notes)]);
    }
    if let Some(tags) = row.time_of_day.as_ref().and_then(time_of_day_text) {
        obs.push_extension(Extension::string(extensions::TIME_OF_DAY, tags));
    }

    obs
}

/// Map every row, keeping row order
pub fn map_symptom_logs(rows: &[SymptomLogRow]) -> Vec<Observation> {
    rows.iter().map(map_symptom_log).collect()
}

/// Map raw JSON; `null` yields no observations
pub fn symptom_logs_from_value(value: &Value) -> crate::Result<Vec<Observation>> {
    let rows: Vec<SymptomLogRow> = crate::rows::rows_from_value(value)?;
    Ok(map_symptom_logs(&rows))
}

/// Tags joined with `", "`; a plain string is used as stored
fn time_of_day_text(time_of_day: &TimeOfDay) -> Option<String> {
    match time_of_day {
        TimeOfDay::Tags(tags) if tags.is_empty() => None,
        TimeOfDay::Tags(tags) => Some(tags.join(", ")),
        TimeOfDay::Text(text) if text.is_empty() => None,
        TimeOfDay::Text(text) => Some(text.clone()),
    }
}

fn survey_category() -> CodeableConcept {
    CodeableConcept::from_coding(
        Coding::new(systems::OBSERVATION_CATEGORY, "survey").with_display("Survey"),
    )
}
