use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};
use ironlog_core::error::{IronlogError, Result};
use ironlog_core::session::{Exercise, Session, SetEntry};
use serde::{Deserialize, Serialize};

// ============================================================================
// Session DTOs
// ============================================================================

/// One logged set as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetV1 {
    pub reps: u32,
    pub weight: f64,
    pub timestamp: String,
}

/// One exercise entry as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseV1 {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub sets: Vec<SetV1>,
}

/// One session as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionV1 {
    pub id: u64,
    /// Calendar date of the start time. Older blobs computed it from the
    /// local input while `startTime` is UTC, so it is kept as stored.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub body_weight: Option<f64>,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub exercises: Vec<ExerciseV1>,
}

fn format_timestamp(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).map_err(|e| IronlogError::Serialization {
        format: "JSON".to_string(),
        message: format!("Invalid {} '{}': {}", field, value, e),
    })
}

// ============================================================================
// Domain → DTO
// ============================================================================

impl From<&SetEntry> for SetV1 {
    fn from(set: &SetEntry) -> Self {
        Self {
            reps: set.reps,
            weight: set.weight,
            timestamp: format_timestamp(&set.timestamp),
        }
    }
}

impl From<&Exercise> for ExerciseV1 {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name.clone(),
            sets: exercise.sets.iter().map(SetV1::from).collect(),
        }
    }
}

impl From<&Session> for SessionV1 {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            date: Some(session.date.format("%Y-%m-%d").to_string()),
            body_weight: session.body_weight,
            start_time: format_timestamp(&session.start_time),
            end_time: session.end_time.as_ref().map(format_timestamp),
            exercises: session.exercises.iter().map(ExerciseV1::from).collect(),
        }
    }
}

// ============================================================================
// DTO → Domain
// ============================================================================

impl TryFrom<SetV1> for SetEntry {
    type Error = IronlogError;

    fn try_from(dto: SetV1) -> Result<Self> {
        Ok(SetEntry {
            reps: dto.reps,
            weight: dto.weight,
            timestamp: parse_timestamp("timestamp", &dto.timestamp)?,
        })
    }
}

impl TryFrom<ExerciseV1> for Exercise {
    type Error = IronlogError;

    fn try_from(dto: ExerciseV1) -> Result<Self> {
        let sets = dto
            .sets
            .into_iter()
            .map(SetEntry::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Exercise {
            id: dto.id,
            name: dto.name,
            sets,
        })
    }
}

impl TryFrom<SessionV1> for Session {
    type Error = IronlogError;

    fn try_from(dto: SessionV1) -> Result<Self> {
        let start_time = parse_timestamp("startTime", &dto.start_time)?;
        let end_time = dto
            .end_time
            .as_deref()
            .map(|value| parse_timestamp("endTime", value))
            .transpose()?;

        let date = match dto.date.as_deref() {
            Some(value) => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                Ok(date) => date,
                Err(_) => {
                    tracing::warn!(
                        "Session {} has unreadable date '{}', deriving it from the start time",
                        dto.id,
                        value
                    );
                    start_time.date_naive()
                }
            },
            None => start_time.date_naive(),
        };

        if end_time.is_some_and(|end| end < start_time) {
            tracing::warn!("Session {} ends before it starts", dto.id);
        }

        let exercises = dto
            .exercises
            .into_iter()
            .map(Exercise::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Session {
            id: dto.id,
            date,
            body_weight: dto.body_weight,
            start_time,
            end_time,
            exercises,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROWSER_BLOB: &str = r#"{
        "id": 1704130000000,
        "date": "2024-01-01",
        "bodyWeight": null,
        "startTime": "2024-01-01T23:30:00.000Z",
        "endTime": null,
        "exercises": [
            {
                "id": 1704130100000,
                "name": "Bench Press",
                "sets": [
                    { "reps": 8, "weight": 60, "timestamp": "2024-01-01T23:35:12.345Z" }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_browser_blob_loads() {
        let dto: SessionV1 = serde_json::from_str(BROWSER_BLOB).unwrap();
        let session = Session::try_from(dto).unwrap();

        assert_eq!(session.id, 1704130000000);
        assert_eq!(session.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(session.body_weight, None);
        assert_eq!(session.end_time, None);
        assert_eq!(session.exercises[0].name, "Bench Press");
        assert_eq!(session.exercises[0].sets[0].weight, 60.0);
        assert_eq!(session.exercises[0].sets[0].reps, 8);
    }

    #[test]
    fn test_stored_date_is_kept_even_when_utc_day_differs() {
        let mut dto: SessionV1 = serde_json::from_str(BROWSER_BLOB).unwrap();
        dto.date = Some("2024-01-02".to_string());
        let session = Session::try_from(dto).unwrap();
        assert_eq!(session.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_missing_date_is_derived_from_start_time() {
        let json = r#"{ "id": 7, "startTime": "2024-03-05T08:00:00+09:00" }"#;
        let session = Session::try_from(serde_json::from_str::<SessionV1>(json).unwrap()).unwrap();
        assert_eq!(session.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert!(session.exercises.is_empty());
    }

    #[test]
    fn test_invalid_timestamp_is_a_serialization_error() {
        let json = r#"{ "id": 7, "startTime": "yesterday" }"#;
        let err = Session::try_from(serde_json::from_str::<SessionV1>(json).unwrap()).unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_domain_to_dto_uses_legacy_field_names() {
        let dto: SessionV1 = serde_json::from_str(BROWSER_BLOB).unwrap();
        let session = Session::try_from(dto).unwrap();
        let value = serde_json::to_value(SessionV1::from(&session)).unwrap();

        assert_eq!(value["date"], "2024-01-01");
        assert_eq!(value["startTime"], "2024-01-01T23:30:00Z");
        assert!(value["bodyWeight"].is_null());
        assert_eq!(value["exercises"][0]["sets"][0]["timestamp"], "2024-01-01T23:35:12.345Z");
    }

    #[test]
    fn test_round_trip_keeps_offset_and_precision() {
        let start = DateTime::parse_from_rfc3339("2024-06-01T18:00:00.123456+02:00").unwrap();
        let end = DateTime::parse_from_rfc3339("2024-06-01T19:10:00+02:00").unwrap();
        let mut session = Session::new(42, start, Some(end), Some(81.5)).unwrap();
        let mut exercise = Exercise::new(43, "Squat").unwrap();
        exercise.add_set(5, 100.0, start).unwrap();
        session.exercises.push(exercise);

        let json = serde_json::to_string(&SessionV1::from(&session)).unwrap();
        let restored = Session::try_from(serde_json::from_str::<SessionV1>(&json).unwrap()).unwrap();
        assert_eq!(restored, session);
    }
}
