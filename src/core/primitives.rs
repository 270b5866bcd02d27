use chrono::{DateTime, NaiveDate, NaiveTime};

use crate::error::{ChartError, ChartResult};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

#[must_use]
pub fn date_to_unix_seconds(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

/// Maps a continuous time back to the calendar date containing it.
///
/// Non-finite or out-of-calendar inputs saturate to the chrono date bounds.
#[must_use]
pub fn unix_seconds_to_date(seconds: f64) -> NaiveDate {
    if seconds.is_nan() {
        return NaiveDate::default();
    }
    let days = (seconds / SECONDS_PER_DAY).floor();
    let clamped = days.clamp(i32::MIN as f64, i32::MAX as f64) as i64;
    NaiveDate::default()
        .checked_add_signed(chrono::Duration::days(clamped))
        .unwrap_or(if clamped < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

/// Parses `YYYY-MM-DD`, falling back to RFC 3339 date-times.
pub fn parse_iso_date(raw: &str) -> ChartResult<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|datetime| datetime.date_naive())
        .map_err(|err| ChartError::InvalidData(format!("unparseable date `{raw}`: {err}")))
}
