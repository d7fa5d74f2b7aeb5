//! Date parsing shared by the views

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Parse a stored date: `YYYY-MM-DD`, an RFC 3339 timestamp or a timestamp
/// without offset. Timestamps keep the calendar date as written.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(timestamp.date());
        }
    }
    Err(Error::InvalidDate(raw.to_string()))
}

/// `M/D/YYYY` label for a chart axis; unparseable text is shown as is
pub fn date_label(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    match parse_date(raw) {
        Ok(date) => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        Err(_) => {
            tracing::debug!(date = raw, "Unparseable effective date, using raw text as label");
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(parse_date("2024-03-01").unwrap(), expected);
        assert_eq!(parse_date("2024-03-01T23:30:00+00:00").unwrap(), expected);
        assert_eq!(parse_date("2024-03-01T23:30:00.123Z").unwrap(), expected);
        assert_eq!(parse_date("2024-03-01T08:00:00").unwrap(), expected);
        assert_eq!(parse_date("2024-03-01 08:00:00.5").unwrap(), expected);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(parse_date("soon"), Err(Error::InvalidDate(_))));
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_date_label() {
        assert_eq!(date_label(Some("2024-01-05")), "1/5/2024");
        assert_eq!(date_label(Some("2024-11-25T10:00:00Z")), "11/25/2024");
        assert_eq!(date_label(Some("yesterday")), "yesterday");
        assert_eq!(date_label(None), "");
    }
}
