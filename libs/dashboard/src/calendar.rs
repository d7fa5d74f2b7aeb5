//! Week and month symptom calendars
//!
//! Weeks run Sunday to Saturday. Each day is shaded by how many symptoms were
//! logged on it.

use crate::error::Error;
use crate::history::{DayHistory, SymptomEntry};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Week,
    Month,
}

impl FromStr for CalendarView {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" => Ok(CalendarView::Week),
            "month" => Ok(CalendarView::Month),
            _ => Err(Error::UnknownView(s.to_string())),
        }
    }
}

/// Shading for a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    None,
    Low,
    Medium,
    High,
}

impl Intensity {
    /// 0 none, 1-2 low, 3-4 medium, 5 or more high
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Intensity::None,
            1..=2 => Intensity::Low,
            3..=4 => Intensity::Medium,
            _ => Intensity::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::None => "none",
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub count: usize,
    pub intensity: Intensity,
    pub is_today: bool,
    pub in_current_month: bool,
    pub symptoms: Vec<SymptomEntry>,
}

/// Sunday through Saturday of the week containing `today`
pub fn week_dates(today: NaiveDate) -> Vec<NaiveDate> {
    let sunday = start_of_week(today);
    sunday.iter_days().take(7).collect()
}

/// Whole weeks covering the month of `today`: from the Sunday on or before
/// the 1st to the Saturday on or after the last day
pub fn month_dates(today: NaiveDate) -> Vec<NaiveDate> {
    let first = today - Duration::days(i64::from(today.day0()));
    let last = first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .last()
        .unwrap_or(first);

    let start = start_of_week(first);
    let end = last + Duration::days(i64::from(6 - last.weekday().num_days_from_sunday()));
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Calendar cells for `view`, filled from grouped history. History dates are
/// matched on their calendar date, so groups keyed by a plain date and by a
/// timestamp on the same day are counted together.
pub fn calendar_days(history: &[DayHistory], view: CalendarView, today: NaiveDate) -> Vec<CalendarDay> {
    let dates = match view {
        CalendarView::Week => week_dates(today),
        CalendarView::Month => month_dates(today),
    };

    let dated: Vec<(Option<NaiveDate>, &DayHistory)> = history
        .iter()
        .map(|day| (crate::dates::parse_date(&day.date).ok(), day))
        .collect();

    dates
        .into_iter()
        .map(|date| {
            let symptoms: Vec<SymptomEntry> = dated
                .iter()
                .filter(|(parsed, _)| *parsed == Some(date))
                .flat_map(|(_, day)| day.symptoms.iter().cloned())
                .collect();
            CalendarDay {
                date,
                count: symptoms.len(),
                intensity: Intensity::from_count(symptoms.len()),
                is_today: date == today,
                in_current_month: date.month() == today.month(),
                symptoms,
            }
        })
        .collect()
}

fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}
