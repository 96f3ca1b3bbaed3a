//! Last-assessment date normalization.
//!
//! The dataset's `Updated` field arrives in whatever shape the export
//! produced: ISO 8601 timestamps, plain dates, US-style dates, or ArcGIS
//! epoch milliseconds. All of them reduce to a `YYYY-MM-DD` calendar date
//! in UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses a dataset timestamp into its UTC calendar date.
#[must_use]
pub fn parse_updated(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(millis) = s.parse::<i64>() {
        return DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.date_naive());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}

/// Formats a facility's last-assessment date, falling back to `fallback`
/// when the dataset has no usable value.
#[must_use]
pub fn last_assessment(updated: Option<&str>, fallback: &str) -> String {
    let Some(raw) = updated.filter(|s| !s.trim().is_empty()) else {
        return fallback.to_string();
    };

    parse_updated(raw).map_or_else(
        || {
            log::warn!("Unparseable update date {raw:?}, using {fallback}");
            fallback.to_string()
        },
        |date| date.format("%Y-%m-%d").to_string(),
    )
}
