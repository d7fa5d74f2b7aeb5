//! Symptom history grouped by day

use nurture_mapper::SymptomLogRow;
use serde::Serialize;
use std::collections::HashMap;

/// A symptom as listed under its day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub severity: Option<i64>,
}

/// All symptoms logged on one `entry_date`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayHistory {
    pub date: String,
    pub symptoms: Vec<SymptomEntry>,
}

impl DayHistory {
    pub fn count(&self) -> usize {
        self.symptoms.len()
    }
}

/// Group rows by `entry_date`. Days appear in the order their first row
/// does, so a query ordered by date stays ordered. Rows without an entry
/// date are skipped.
pub fn group_by_entry_date(rows: &[SymptomLogRow]) -> Vec<DayHistory> {
    let mut days: Vec<DayHistory> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let Some(date) = row.entry_date.as_deref().filter(|d| !d.trim().is_empty()) else {
            tracing::debug!(id = ?row.id, "Skipping symptom log without entry date");
            continue;
        };
        let slot = *index.entry(date.to_string()).or_insert_with(|| {
            days.push(DayHistory {
                date: date.to_string(),
                symptoms: Vec::new(),
            });
            days.len() - 1
        });
        days[slot].symptoms.push(SymptomEntry {
            id: row.symptom_id.clone(),
            name: row.symptom_name.clone(),
            severity: row.severity,
        });
    }

    days
}
