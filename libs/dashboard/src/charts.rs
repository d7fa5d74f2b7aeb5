//! Chart series for the health dashboard
//!
//! Series are keyed on the first coding of each observation, the same way
//! the vitals mapper writes them.

use crate::dates::date_label;
use nurture_mapper::terminology::loinc;
use nurture_models::common::Observation;
use serde::Serialize;
use serde_json::Number;

/// One point on a chart; `value` is absent when the reading was missing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: String,
    pub value: Option<Number>,
}

/// A titled series, one per dashboard chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSeries {
    pub metric_name: &'static str,
    pub title: String,
    pub data: Vec<ChartPoint>,
}

impl MetricSeries {
    fn new(metric_name: &'static str, data: Vec<ChartPoint>) -> Self {
        Self {
            metric_name,
            title: format_metric_name(metric_name),
            data,
        }
    }
}

/// Points for observations coded `code` that carry a `valueQuantity`
pub fn series_for_code(observations: &[Observation], code: &str) -> Vec<ChartPoint> {
    observations
        .iter()
        .filter(|obs| obs.primary_code() == Some(code))
        .filter_map(|obs| {
            let quantity = obs.value_quantity.as_ref()?;
            Some(ChartPoint {
                date: date_label(obs.effective_date_time.as_deref()),
                value: quantity.value.clone(),
            })
        })
        .collect()
}

/// Points for one component (systolic or diastolic) of every blood-pressure
/// panel; panels lacking the component still get a point without value
pub fn blood_pressure_series(observations: &[Observation], component_code: &str) -> Vec<ChartPoint> {
    observations
        .iter()
        .filter(|obs| obs.primary_code() == Some(loinc::BLOOD_PRESSURE_PANEL))
        .map(|obs| ChartPoint {
            date: date_label(obs.effective_date_time.as_deref()),
            value: obs
                .component_by_code(component_code)
                .and_then(|c| c.value_quantity.as_ref())
                .and_then(|q| q.value.clone()),
        })
        .collect()
}

/// The six dashboard charts, in display order
pub fn dashboard_series(observations: &[Observation]) -> Vec<MetricSeries> {
    vec![
        MetricSeries::new("weight", series_for_code(observations, loinc::BODY_WEIGHT)),
        MetricSeries::new("heart_rate", series_for_code(observations, loinc::HEART_RATE)),
        MetricSeries::new("blood_sugar", series_for_code(observations, loinc::BLOOD_GLUCOSE)),
        MetricSeries::new(
            "temperature",
            series_for_code(observations, loinc::BODY_TEMPERATURE),
        ),
        MetricSeries::new(
            "systolic_blood_pressure",
            blood_pressure_series(observations, loinc::SYSTOLIC),
        ),
        MetricSeries::new(
            "diastolic_blood_pressure",
            blood_pressure_series(observations, loinc::DIASTOLIC),
        ),
    ]
}

/// `"heart_rate"` becomes `"Heart Rate"`
pub fn format_metric_name(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
