//! Parsing of command-line values.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};
use ironlog_core::error::{IronlogError, Result};

/// Layouts accepted for wall-clock times, in the order they are tried.
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses a time argument in the local time zone.
pub fn parse_time(value: &str) -> Result<DateTime<FixedOffset>> {
    parse_time_in(value, &Local)
}

/// Parses RFC 3339, or one of the wall-clock layouts interpreted in `tz`.
///
/// A wall-clock time that does not exist in `tz` (skipped by a DST change)
/// is a validation error; an ambiguous one resolves to the earlier instant.
pub fn parse_time_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Result<DateTime<FixedOffset>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed);
    }

    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| {
            IronlogError::validation(format!(
                "Invalid time '{}', expected YYYY-MM-DDTHH:MM or RFC 3339",
                value
            ))
        })?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.fixed_offset())
        .ok_or_else(|| IronlogError::validation(format!("Time '{}' does not exist locally", value)))
}

/// Parses a finite number such as a weight.
pub fn parse_number(value: &str) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(IronlogError::validation(format!(
            "'{}' is not a valid number",
            value
        ))),
    }
}
