//! Health-metric rows to vital-sign `Observation`s
//!
//! The observations carry no `status` and no `subject`; the dashboard only
//! charts them.

use crate::rows::{present, HealthMetricRow};
use crate::terminology::{loinc, systems};
use nurture_models::common::{
    CodeableConcept, Coding, Observation, ObservationComponent, Quantity,
};
use serde_json::{Number, Value};

/// Single-valued vitals, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vital {
    Weight,
    HeartRate,
    BloodSugar,
    Temperature,
}

impl Vital {
    pub const ALL: [Vital; 4] = [
        Vital::Weight,
        Vital::HeartRate,
        Vital::BloodSugar,
        Vital::Temperature,
    ];

    pub fn loinc_code(self) -> &'static str {
        match self {
            Vital::Weight => loinc::BODY_WEIGHT,
            Vital::HeartRate => loinc::HEART_RATE,
            Vital::BloodSugar => loinc::BLOOD_GLUCOSE,
            Vital::Temperature => loinc::BODY_TEMPERATURE,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Vital::Weight => "kg",
            Vital::HeartRate => "beats/min",
            Vital::BloodSugar => "mg/dL",
            Vital::Temperature => "°F",
        }
    }

    /// Column name in `health_metrics`
    pub fn column(self) -> &'static str {
        match self {
            Vital::Weight => "weight",
            Vital::HeartRate => "heart_rate",
            Vital::BloodSugar => "blood_sugar",
            Vital::Temperature => "temperature",
        }
    }

    fn reading(self, row: &HealthMetricRow) -> Option<Number> {
        match self {
            Vital::Weight => row.weight.clone(),
            Vital::HeartRate => row.heart_rate.clone(),
            Vital::BloodSugar => row.blood_sugar.clone(),
            Vital::Temperature => row.temperature.clone(),
        }
    }
}

pub const BLOOD_PRESSURE_UNIT: &str = "mmHg";

/// A `"systolic/diastolic"` reading split into its parts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BloodPressure {
    pub systolic: Option<i64>,
    pub diastolic: Option<i64>,
}

impl BloodPressure {
    /// Parse `"120/80"`. Each side must be an integer; a side that is not
    /// stays `None`, and a string without `/` yields neither side.
    pub fn parse(raw: &str) -> Self {
        let Some((systolic, rest)) = raw.split_once('/') else {
            tracing::debug!(blood_pressure = raw, "Blood pressure has no '/' separator");
            return Self::default();
        };
        let diastolic = rest.split('/').next().unwrap_or_default();

        let reading = Self {
            systolic: systolic.trim().parse().ok(),
            diastolic: diastolic.trim().parse().ok(),
        };
        if reading.systolic.is_none() || reading.diastolic.is_none() {
            tracing::debug!(blood_pressure = raw, "Blood pressure has a non-numeric part");
        }
        reading
    }

    /// Mean arterial pressure, `(systolic + 2 * diastolic) / 3`, to one decimal
    pub fn mean_arterial(&self) -> Option<f64> {
        let (systolic, diastolic) = (self.systolic?, self.diastolic?);
        let mean = (systolic as f64 + 2.0 * diastolic as f64) / 3.0;
        Some((mean * 10.0).round() / 10.0)
    }
}

/// Map a health-metric row to its observations: weight, heart rate, blood
/// sugar, temperature and the blood-pressure panel, followed by a mean
/// arterial pressure observation when the row has a blood-pressure value.
///
/// The panel and its two components are emitted even when the reading is
/// missing or malformed; the component values are then written as `null`.
pub fn map_health_metrics(row: &HealthMetricRow) -> Vec<Observation> {
    let effective = present(&row.created_at);
    let recorded = present(&row.blood_pressure).map(BloodPressure::parse);
    let reading = recorded.unwrap_or_default();

    let mut observations: Vec<Observation> = Vital::ALL
        .iter()
        .map(|vital| vital_observation(*vital, vital.reading(row), effective))
        .collect();
    observations.push(blood_pressure_panel(&reading, effective));

    if let Some(reading) = recorded {
        let mean = reading.mean_arterial().and_then(Number::from_f64);
        let mut obs = Observation::new(loinc_concept(loinc::MEAN_BLOOD_PRESSURE));
        obs.effective_date_time = effective.map(str::to_owned);
        obs.value_quantity = Some(Quantity::maybe(mean, BLOOD_PRESSURE_UNIT));
        observations.push(obs);
    }

    observations
}

/// Map every row, flattening the observations in row order
pub fn map_health_metric_rows(rows: &[HealthMetricRow]) -> Vec<Observation> {
    rows.iter().flat_map(map_health_metrics).collect()
}

/// Map raw JSON; `null` yields no observations
pub fn health_metrics_from_value(value: &Value) -> crate::Result<Vec<Observation>> {
    let rows: Vec<HealthMetricRow> = crate::rows::rows_from_value(value)?;
    Ok(map_health_metric_rows(&rows))
}

fn vital_observation(vital: Vital, value: Option<Number>, effective: Option<&str>) -> Observation {
    let mut obs = Observation::new(loinc_concept(vital.loinc_code()));
    obs.effective_date_time = effective.map(str::to_owned);
    obs.value_quantity = Some(Quantity::maybe(value, vital.unit()));
    obs
}

fn blood_pressure_panel(reading: &BloodPressure, effective: Option<&str>) -> Observation {
    let component = |code: &str, value: Option<i64>| {
        ObservationComponent::new(
            loinc_concept(code),
            Some(Quantity::reported(value.map(Number::from), BLOOD_PRESSURE_UNIT)),
        )
    };

    let mut obs = Observation::new(loinc_concept(loinc::BLOOD_PRESSURE_PANEL));
    obs.effective_date_time = effective.map(str::to_owned);
    obs.component = Some(vec![
        component(loinc::SYSTOLIC, reading.systolic),
        component(loinc::DIASTOLIC, reading.diastolic),
    ]);
    obs
}

fn loinc_concept(code: &str) -> CodeableConcept {
    CodeableConcept::from_coding(Coding::new(systems::LOINC, code))
}
