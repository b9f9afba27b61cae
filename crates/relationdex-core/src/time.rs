use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};
use thiserror::Error;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

#[derive(Debug, Error)]
pub enum TimeParseError {
    #[error("timestamp cannot be empty")]
    Empty,
    #[error("invalid datetime format: expected RFC 3339, YYYY-MM-DD or YYYY-MM-DD HH:MM")]
    InvalidDateTime,
    #[error("ambiguous local time: {0}")]
    AmbiguousLocalTime(String),
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parses an RFC 3339 timestamp, or a date / datetime in local time.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return local_to_utc(date.and_time(NaiveTime::MIN));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return local_to_utc(dt);
        }
    }

    Err(TimeParseError::InvalidDateTime)
}

pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn format_timestamp_date(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

fn local_to_utc(naive: NaiveDateTime) -> Result<DateTime<Utc>, TimeParseError> {
    let local = Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| TimeParseError::AmbiguousLocalTime(naive.to_string()))?;
    Ok(local.with_timezone(&Utc))
}
