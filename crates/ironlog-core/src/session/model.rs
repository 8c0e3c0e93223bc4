//! Session domain model.
//!
//! A workout session holds an ordered list of exercises, each with an ordered
//! list of sets. These are the "pure" domain types; the persisted JSON shape
//! is owned by the infrastructure layer.

use super::duration::SessionDuration;
use crate::error::{IronlogError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// One performed unit of an exercise: reps × weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetEntry {
    /// Repetitions, always at least 1
    pub reps: u32,
    /// Load in weight units, never negative
    pub weight: f64,
    /// When the set was logged
    pub timestamp: DateTime<FixedOffset>,
}

impl SetEntry {
    /// Validates raw form input and builds a set.
    ///
    /// `reps` is taken as a signed value so that zero and negative input can
    /// be reported instead of silently wrapping.
    pub fn new(reps: i64, weight: f64, timestamp: DateTime<FixedOffset>) -> Result<Self> {
        if reps < 1 {
            return Err(IronlogError::validation(
                "Please enter valid reps and weight: reps must be at least 1",
            ));
        }
        let reps = u32::try_from(reps).map_err(|_| {
            IronlogError::validation("Please enter valid reps and weight: reps is too large")
        })?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(IronlogError::validation(
                "Please enter valid reps and weight: weight must be a non-negative number",
            ));
        }
        Ok(Self {
            reps,
            weight,
            timestamp,
        })
    }

    /// Work done by this set (reps × weight).
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight
    }
}

/// A named movement performed during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: u64,
    /// Trimmed, non-empty name
    pub name: String,
    pub sets: Vec<SetEntry>,
}

impl Exercise {
    /// Creates an exercise with no sets. The name is trimmed and must not be
    /// empty afterwards.
    pub fn new(id: u64, name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(IronlogError::validation(
                "Please select or enter an exercise name",
            ));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            sets: Vec::new(),
        })
    }

    /// Appends a validated set.
    pub fn add_set(
        &mut self,
        reps: i64,
        weight: f64,
        timestamp: DateTime<FixedOffset>,
    ) -> Result<&SetEntry> {
        let set = SetEntry::new(reps, weight, timestamp)?;
        self.sets.push(set);
        Ok(&self.sets[self.sets.len() - 1])
    }

    /// Removes the set at `index`. An out-of-range index is ignored.
    pub fn remove_set(&mut self, index: usize) -> Option<SetEntry> {
        if index < self.sets.len() {
            Some(self.sets.remove(index))
        } else {
            None
        }
    }

    pub fn has_sets(&self) -> bool {
        !self.sets.is_empty()
    }
}

/// One workout occurrence bounded by a start and optional end time.
///
/// `date` is always the calendar date of `start_time` in the offset the time
/// was recorded in. Use [`Session::set_start_time`] rather than writing the
/// field directly so the two never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: u64,
    pub date: NaiveDate,
    pub body_weight: Option<f64>,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub exercises: Vec<Exercise>,
}

impl Session {
    /// Creates a session after checking its times and body weight.
    pub fn new(
        id: u64,
        start_time: DateTime<FixedOffset>,
        end_time: Option<DateTime<FixedOffset>>,
        body_weight: Option<f64>,
    ) -> Result<Self> {
        validate_times(start_time, end_time)?;
        validate_body_weight(body_weight)?;
        Ok(Self {
            id,
            date: start_time.date_naive(),
            body_weight,
            start_time,
            end_time,
            exercises: Vec::new(),
        })
    }

    /// Replaces the start time and re-derives `date`.
    pub fn set_start_time(&mut self, start_time: DateTime<FixedOffset>) {
        self.start_time = start_time;
        self.date = start_time.date_naive();
    }

    /// Replaces both times after checking `end >= start`.
    pub fn set_times(
        &mut self,
        start_time: DateTime<FixedOffset>,
        end_time: Option<DateTime<FixedOffset>>,
    ) -> Result<()> {
        validate_times(start_time, end_time)?;
        self.set_start_time(start_time);
        self.end_time = end_time;
        Ok(())
    }

    pub fn duration(&self) -> SessionDuration {
        SessionDuration::between(self.start_time, self.end_time)
    }

    pub fn exercise(&self, exercise_id: u64) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == exercise_id)
    }

    pub fn exercise_mut(&mut self, exercise_id: u64) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|e| e.id == exercise_id)
    }

    /// First exercise with this name that has at least one set.
    pub fn performed_exercise(&self, name: &str) -> Option<&Exercise> {
        self.exercises
            .iter()
            .find(|e| e.name == name && e.has_sets())
    }

    /// Removes every exercise with a matching id.
    pub fn remove_exercise(&mut self, exercise_id: u64) -> Option<Exercise> {
        let position = self.exercises.iter().position(|e| e.id == exercise_id)?;
        let removed = self.exercises.remove(position);
        self.exercises.retain(|e| e.id != exercise_id);
        Some(removed)
    }

    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}

/// Checks that an end time, if any, is not before the start time.
pub fn validate_times(
    start_time: DateTime<FixedOffset>,
    end_time: Option<DateTime<FixedOffset>>,
) -> Result<()> {
    match end_time {
        Some(end) if end < start_time => Err(IronlogError::validation(
            "End time cannot be before the start time",
        )),
        _ => Ok(()),
    }
}

/// Body weight is optional but must be a positive number when given.
pub fn validate_body_weight(body_weight: Option<f64>) -> Result<()> {
    match body_weight {
        Some(w) if !w.is_finite() || w <= 0.0 => Err(IronlogError::validation(
            "Body weight must be a positive number",
        )),
        _ => Ok(()),
    }
}
