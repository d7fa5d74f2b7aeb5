//! Subcommand implementations
//!
//! Each command turns exported rows (already parsed JSON) into the JSON it
//! prints, so the commands can be tested without touching stdin or files.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use nurture_dashboard::{
    calendar_days, dashboard_series, group_by_entry_date, parse_date, CalendarView,
    PregnancyProgress,
};
use nurture_mapper::{
    health_metrics_from_value, patient_from_value, profile_from_value, rows_from_value,
    symptom_logs_from_value, SymptomLogRow,
};
use nurture_models::common::{Bundle, Observation};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Read JSON from a file, or from stdin when `input` is `-`
pub fn read_input(input: &str) -> Result<Value> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(Path::new(input))
            .with_context(|| format!("Failed to read {input}"))?
    };
    serde_json::from_str(&text).with_context(|| format!("{input} is not valid JSON"))
}

/// One patient row to a `Patient`; `null` when there is no row
pub fn patient(rows: &Value) -> Result<Value> {
    match patient_from_value(rows) {
        Some(patient) => Ok(patient.to_value()?),
        None => Ok(Value::Null),
    }
}

/// One patient row to a collection bundle of its profile documents
pub fn profile(rows: &Value) -> Result<Value> {
    match profile_from_value(rows) {
        Some(profile) => Ok(profile.to_bundle()?.to_value()?),
        None => Ok(Value::Null),
    }
}

/// Health-metric rows to observations, or to the dashboard chart series
pub fn vitals(rows: &Value, charts: bool, bundle: bool) -> Result<Value> {
    let observations = health_metrics_from_value(rows).context("Invalid health metric rows")?;
    tracing::info!(count = observations.len(), "Mapped health metric observations");

    if charts {
        return Ok(serde_json::to_value(dashboard_series(&observations))?);
    }
    observation_output(&observations, bundle)
}

/// How `symptoms` renders its rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymptomView {
    Observations { bundle: bool },
    History,
    Calendar { view: CalendarView, today: NaiveDate },
}

pub fn symptoms(rows: &Value, view: SymptomView) -> Result<Value> {
    match view {
        SymptomView::Observations { bundle } => {
            let observations = symptom_logs_from_value(rows).context("Invalid symptom log rows")?;
            tracing::info!(count = observations.len(), "Mapped symptom observations");
            observation_output(&observations, bundle)
        }
        SymptomView::History => {
            let rows: Vec<SymptomLogRow> =
                rows_from_value(rows).context("Invalid symptom log rows")?;
            Ok(serde_json::to_value(group_by_entry_date(&rows))?)
        }
        SymptomView::Calendar { view, today } => {
            let rows: Vec<SymptomLogRow> =
                rows_from_value(rows).context("Invalid symptom log rows")?;
            let history = group_by_entry_date(&rows);
            Ok(serde_json::to_value(calendar_days(&history, view, today))?)
        }
    }
}

pub fn progress(conception_date: &str, today: NaiveDate) -> Result<Value> {
    let progress = PregnancyProgress::from_conception_date(conception_date, today)
        .context("Invalid conception date")?;
    Ok(serde_json::to_value(progress)?)
}

/// `--today`, or the local date when absent
pub fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(raw) => parse_date(raw).context("Invalid --today"),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn observation_output(observations: &[Observation], bundle: bool) -> Result<Value> {
    if bundle {
        Ok(Bundle::collection(observations)?.to_value()?)
    } else {
        Ok(serde_json::to_value(observations)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(raw: &str) -> NaiveDate {
        parse_date(raw).unwrap()
    }

    #[test]
    fn test_patient_command() {
        let out = patient(&json!({ "id": 1, "name": "Jane Doe" })).unwrap();
        assert_eq!(out["resourceType"], "Patient");
        assert_eq!(patient(&Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn test_patient_command_prints_stored_document() {
        let stored = json!({ "resourceType": "Patient", "id": 123, "birthDate": null });
        let out = patient(&json!({ "id": 1, "name": "Jane Doe", "resource": stored })).unwrap();
        assert_eq!(out, json!({ "resourceType": "Patient", "id": 123, "birthDate": null }));
    }

    #[test]
    fn test_profile_command_bundles_documents() {
        let out = profile(&json!({ "id": 1, "insuranceProvider": "Acme Health" })).unwrap();
        assert_eq!(out["type"], "collection");
        assert_eq!(out["entry"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_vitals_command() {
        let rows = json!([{ "created_at": "2024-01-01", "weight": 70 }]);
        assert_eq!(vitals(&rows, false, false).unwrap().as_array().unwrap().len(), 5);

        let bundle = vitals(&rows, false, true).unwrap();
        assert_eq!(bundle["resourceType"], "Bundle");
        assert_eq!(bundle["entry"].as_array().unwrap().len(), 5);

        let charts = vitals(&rows, true, false).unwrap();
        assert_eq!(charts[0]["data"][0]["date"], "1/1/2024");
    }

    #[test]
    fn test_vitals_rejects_scalar_input() {
        assert!(vitals(&json!(42), false, false).is_err());
    }

    #[test]
    fn test_symptoms_views() {
        let rows = json!([
            { "entry_date": "2024-05-14", "symptom_name": "Nausea", "severity": 2 },
            { "entry_date": "2024-05-14", "symptom_name": "Fatigue", "severity": 3 }
        ]);

        let observations =
            symptoms(&rows, SymptomView::Observations { bundle: false }).unwrap();
        assert_eq!(observations[0]["status"], "final");

        let history = symptoms(&rows, SymptomView::History).unwrap();
        assert_eq!(history[0]["symptoms"].as_array().unwrap().len(), 2);

        let calendar = symptoms(
            &rows,
            SymptomView::Calendar {
                view: CalendarView::Week,
                today: day("2024-05-15"),
            },
        )
        .unwrap();
        assert_eq!(calendar.as_array().unwrap().len(), 7);
        assert_eq!(calendar[2]["count"], 2);
    }

    #[test]
    fn test_progress_command() {
        let out = progress("2024-01-01", day("2024-05-20")).unwrap();
        assert_eq!(out["weeks"], 20);
        assert!(progress("someday", day("2024-05-20")).is_err());
    }

    #[test]
    fn test_resolve_today() {
        assert_eq!(resolve_today(Some("2024-05-20")).unwrap(), day("2024-05-20"));
        assert!(resolve_today(Some("tomorrow")).is_err());
    }
}
