//! Views derived from nurture documents
//!
//! - [`charts`]: one series per vital for the health dashboard
//! - [`history`]: symptom logs grouped by day
//! - [`calendar`]: week and month grids shaded by symptom count
//! - [`pregnancy`]: weeks along, trimester and progress from the conception date
//!
//! All functions are pure; "today" is always passed in.

pub mod calendar;
pub mod charts;
pub mod dates;
pub mod error;
pub mod history;
pub mod pregnancy;

pub use calendar::{calendar_days, month_dates, week_dates, CalendarDay, CalendarView, Intensity};
pub use charts::{
    blood_pressure_series, dashboard_series, format_metric_name, series_for_code, ChartPoint,
    MetricSeries,
};
pub use dates::{date_label, parse_date};
pub use error::{Error, Result};
pub use history::{group_by_entry_date, DayHistory, SymptomEntry};
pub use pregnancy::{
    progress_percent, size_comparison, weeks_from_conception, PregnancyProgress, Trimester,
};
