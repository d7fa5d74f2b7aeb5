//! Pregnancy progress from the stored conception date

use crate::dates::parse_date;
use crate::error::Result;
use chrono::NaiveDate;
use serde::Serialize;

/// Length of a full-term pregnancy, and the cap on reported weeks
pub const FULL_TERM_WEEKS: u32 = 40;

/// Whole weeks since conception: days / 7 rounded to the nearest week and
/// clamped to `0..=40`
pub fn weeks_from_conception(conception: NaiveDate, today: NaiveDate) -> u32 {
    let days = (today - conception).num_days();
    let weeks = (days as f64 / 7.0).round();
    weeks.clamp(0.0, f64::from(FULL_TERM_WEEKS)) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    pub fn from_weeks(weeks: u32) -> Self {
        if weeks < 13 {
            Trimester::First
        } else if weeks < 28 {
            Trimester::Second
        } else {
            Trimester::Third
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trimester::First => "First trimester",
            Trimester::Second => "Second trimester",
            Trimester::Third => "Third trimester",
        }
    }
}

/// Share of a full-term pregnancy, rounded to a whole percent
pub fn progress_percent(weeks: u32) -> u32 {
    let weeks = weeks.min(FULL_TERM_WEEKS);
    (f64::from(weeks) / f64::from(FULL_TERM_WEEKS) * 100.0).round() as u32
}

/// What the baby is about the size of
pub fn size_comparison(weeks: u32) -> &'static str {
    match weeks {
        0..=3 => "poppy seed",
        4..=7 => "blueberry",
        8..=11 => "lime",
        12..=15 => "avocado",
        16..=19 => "banana",
        20..=23 => "ear of corn",
        24..=27 => "eggplant",
        28..=31 => "squash",
        32..=35 => "butternut squash",
        _ => "pumpkin",
    }
}

/// Everything the progress card shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PregnancyProgress {
    pub weeks: u32,
    pub trimester: Trimester,
    pub trimester_label: &'static str,
    pub percent: u32,
    pub size_comparison: &'static str,
}

impl PregnancyProgress {
    pub fn from_weeks(weeks: u32) -> Self {
        let weeks = weeks.min(FULL_TERM_WEEKS);
        let trimester = Trimester::from_weeks(weeks);
        Self {
            weeks,
            trimester,
            trimester_label: trimester.label(),
            percent: progress_percent(weeks),
            size_comparison: size_comparison(weeks),
        }
    }

    pub fn new(conception: NaiveDate, today: NaiveDate) -> Self {
        Self::from_weeks(weeks_from_conception(conception, today))
    }

    /// Progress from the `conception_date` column as stored
    pub fn from_conception_date(conception_date: &str, today: NaiveDate) -> Result<Self> {
        let conception = parse_date(conception_date)?;
        Ok(Self::new(conception, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weeks_round_to_nearest() {
        let conception = date(2024, 1, 1);
        assert_eq!(weeks_from_conception(conception, date(2024, 1, 1)), 0);
        assert_eq!(weeks_from_conception(conception, date(2024, 1, 4)), 0);
        assert_eq!(weeks_from_conception(conception, date(2024, 1, 5)), 1);
        assert_eq!(weeks_from_conception(conception, date(2024, 3, 11)), 10);
    }

    #[test]
    fn test_weeks_are_clamped() {
        let conception = date(2024, 1, 1);
        assert_eq!(weeks_from_conception(conception, date(2023, 12, 1)), 0);
        assert_eq!(weeks_from_conception(conception, date(2025, 6, 1)), 40);
    }

    #[test]
    fn test_trimester_boundaries() {
        assert_eq!(Trimester::from_weeks(12), Trimester::First);
        assert_eq!(Trimester::from_weeks(13), Trimester::Second);
        assert_eq!(Trimester::from_weeks(27), Trimester::Second);
        assert_eq!(Trimester::from_weeks(28), Trimester::Third);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0), 0);
        assert_eq!(progress_percent(20), 50);
        assert_eq!(progress_percent(13), 33);
        assert_eq!(progress_percent(40), 100);
        assert_eq!(progress_percent(55), 100);
    }

    #[test]
    fn test_size_comparison() {
        assert_eq!(size_comparison(3), "poppy seed");
        assert_eq!(size_comparison(4), "blueberry");
        assert_eq!(size_comparison(22), "ear of corn");
        assert_eq!(size_comparison(40), "pumpkin");
    }

    #[test]
    fn test_progress_from_stored_date() {
        let progress = PregnancyProgress::from_conception_date("2024-01-01", date(2024, 5, 20)).unwrap();
        assert_eq!(progress.weeks, 20);
        assert_eq!(progress.trimester, Trimester::Second);
        assert_eq!(progress.percent, 50);
        assert_eq!(progress.size_comparison, "ear of corn");
    }

    #[test]
    fn test_invalid_conception_date() {
        let err = PregnancyProgress::from_conception_date("not a date", date(2024, 5, 20)).unwrap_err();
        assert!(matches!(err, Error::InvalidDate(_)));
    }
}
