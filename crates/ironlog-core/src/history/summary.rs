//! Per-session summaries shown in the history list.

use crate::metrics::{ExerciseStats, OverloadIndicator};
use crate::session::{Exercise, Session, SessionDuration};
use chrono::NaiveDate;
use serde::Serialize;

/// Summary line for one performed exercise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSummary {
    pub exercise_id: u64,
    pub name: String,
    pub stats: ExerciseStats,
    /// Comparison with the previous session that had this exercise
    pub indicator: OverloadIndicator,
}

/// Everything the history card shows for one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: u64,
    pub date: NaiveDate,
    pub body_weight: Option<f64>,
    pub duration: SessionDuration,
    pub exercise_count: usize,
    pub total_sets: usize,
    /// Exercises with at least one set
    pub exercises: Vec<ExerciseSummary>,
}

/// Sessions ordered oldest first by date, ties in source order.
pub fn chronological(sessions: &[Session]) -> Vec<&Session> {
    let mut ordered: Vec<&Session> = sessions.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date));
    ordered
}

/// The most recent earlier performance of `exercise_name` before the
/// session `session_id`.
///
/// "Earlier" follows [`chronological`] order, so of two sessions on the
/// same date the one stored first counts as earlier.
pub fn previous_performance<'a>(
    sessions: &'a [Session],
    session_id: u64,
    exercise_name: &str,
) -> Option<&'a Exercise> {
    let ordered = chronological(sessions);
    let position = ordered.iter().position(|s| s.id == session_id)?;
    ordered[..position]
        .iter()
        .rev()
        .find_map(|s| s.performed_exercise(exercise_name))
}

/// Classifies how `exercise_name` in session `session_id` compares with its
/// previous performance.
///
/// Returns `None` when the session is unknown or did not perform the
/// exercise.
pub fn overload_indicator_for(
    sessions: &[Session],
    session_id: u64,
    exercise_name: &str,
    tolerance: f64,
) -> Option<OverloadIndicator> {
    let session = sessions.iter().find(|s| s.id == session_id)?;
    let current = session.performed_exercise(exercise_name)?;
    let previous = previous_performance(sessions, session_id, exercise_name);
    Some(OverloadIndicator::classify(
        &current.sets,
        previous.map(|e| e.sets.as_slice()),
        tolerance,
    ))
}

/// Builds the history card data for `session`, comparing every performed
/// exercise against the rest of `sessions`.
pub fn summarize_session(sessions: &[Session], session: &Session, tolerance: f64) -> SessionSummary {
    let exercises = session
        .exercises
        .iter()
        .filter_map(|exercise| {
            let stats = ExerciseStats::from_sets(&exercise.sets).ok()?;
            let previous = previous_performance(sessions, session.id, &exercise.name);
            let indicator = OverloadIndicator::classify(
                &exercise.sets,
                previous.map(|e| e.sets.as_slice()),
                tolerance,
            );
            Some(ExerciseSummary {
                exercise_id: exercise.id,
                name: exercise.name.clone(),
                stats,
                indicator,
            })
        })
        .collect();

    SessionSummary {
        session_id: session.id,
        date: session.date,
        body_weight: session.body_weight,
        duration: session.duration(),
        exercise_count: session.exercises.len(),
        total_sets: session.total_sets(),
        exercises,
    }
}
