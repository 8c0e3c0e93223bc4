//! Session duration display rule.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;

/// Length of a session as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "minutes")]
pub enum SessionDuration {
    /// No end time recorded yet.
    Ongoing,
    /// Whole minutes between start and end, rounded half up.
    Minutes(i64),
}

impl SessionDuration {
    pub fn between(start: DateTime<FixedOffset>, end: Option<DateTime<FixedOffset>>) -> Self {
        match end {
            None => Self::Ongoing,
            Some(end) => {
                let millis = (end - start).num_milliseconds();
                let minutes = (millis as f64 / 60_000.0 + 0.5).floor() as i64;
                Self::Minutes(minutes)
            }
        }
    }

    pub fn is_ongoing(&self) -> bool {
        matches!(self, Self::Ongoing)
    }
}

impl fmt::Display for SessionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => write!(f, "Ongoing"),
            Self::Minutes(minutes) if *minutes < 60 => write!(f, "{} minutes", minutes),
            Self::Minutes(minutes) => write!(f, "{}h {}m", minutes / 60, minutes % 60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_ongoing_without_end() {
        let duration = SessionDuration::between(at("2024-03-01T18:00:00+01:00"), None);
        assert!(duration.is_ongoing());
        assert_eq!(duration.to_string(), "Ongoing");
    }

    #[test]
    fn test_under_an_hour() {
        let duration = SessionDuration::between(
            at("2024-03-01T18:00:00+01:00"),
            Some(at("2024-03-01T18:45:00+01:00")),
        );
        assert_eq!(duration, SessionDuration::Minutes(45));
        assert_eq!(duration.to_string(), "45 minutes");
    }

    #[test]
    fn test_hours_and_minutes() {
        let duration = SessionDuration::between(
            at("2024-03-01T18:00:00+01:00"),
            Some(at("2024-03-01T19:35:00+01:00")),
        );
        assert_eq!(duration.to_string(), "1h 35m");

        let exact = SessionDuration::between(
            at("2024-03-01T18:00:00+01:00"),
            Some(at("2024-03-01T20:00:00+01:00")),
        );
        assert_eq!(exact.to_string(), "2h 0m");
    }

    #[test]
    fn test_rounds_half_minute_up() {
        let duration = SessionDuration::between(
            at("2024-03-01T18:00:00Z"),
            Some(at("2024-03-01T18:10:30Z")),
        );
        assert_eq!(duration, SessionDuration::Minutes(11));

        let below = SessionDuration::between(
            at("2024-03-01T18:00:00Z"),
            Some(at("2024-03-01T18:10:29Z")),
        );
        assert_eq!(below, SessionDuration::Minutes(10));
    }

    #[test]
    fn test_offsets_do_not_change_length() {
        let duration = SessionDuration::between(
            at("2024-03-01T18:00:00+01:00"),
            Some(at("2024-03-01T17:30:00Z")),
        );
        assert_eq!(duration.to_string(), "30 minutes");
    }
}
