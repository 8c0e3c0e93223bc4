//! Per-exercise statistics.

use super::round_tenth;
use crate::error::{IronlogError, Result};
use crate::session::SetEntry;
use serde::Serialize;

/// Epley estimate of the one-rep max, rounded to one decimal.
///
/// ```
/// use ironlog_core::metrics::estimated_one_rep_max;
///
/// assert_eq!(estimated_one_rep_max(100.0, 5), 116.7);
/// ```
pub fn estimated_one_rep_max(weight: f64, reps: u32) -> f64 {
    round_tenth(weight * (1.0 + f64::from(reps) / 30.0))
}

/// Picks the set with the highest estimated one-rep max.
///
/// Ties go to the set encountered first. Returns `None` for no sets.
pub fn best_set(sets: &[SetEntry]) -> Option<&SetEntry> {
    let mut iter = sets.iter();
    let first = iter.next()?;
    Some(iter.fold(first, |best, set| {
        if estimated_one_rep_max(set.weight, set.reps) > estimated_one_rep_max(best.weight, best.reps)
        {
            set
        } else {
            best
        }
    }))
}

/// Summary numbers for one exercise in one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseStats {
    pub max_weight: f64,
    /// Σ reps × weight
    pub total_volume: f64,
    /// Estimated one-rep max of the best set
    #[serde(rename = "estimatedOneRM")]
    pub estimated_one_rm: f64,
    pub total_sets: usize,
    pub best_set: SetEntry,
}

impl ExerciseStats {
    /// Derives stats from an exercise's sets.
    ///
    /// # Errors
    ///
    /// `EmptyInput` when `sets` is empty; callers are expected to skip
    /// exercises without sets.
    pub fn from_sets(sets: &[SetEntry]) -> Result<Self> {
        let best = best_set(sets)
            .ok_or_else(|| IronlogError::empty_input("cannot derive stats from zero sets"))?;
        let max_weight = sets
            .iter()
            .map(|s| s.weight)
            .fold(f64::NEG_INFINITY, f64::max);
        let total_volume = sets.iter().map(SetEntry::volume).sum();

        Ok(Self {
            max_weight,
            total_volume,
            estimated_one_rm: estimated_one_rep_max(best.weight, best.reps),
            total_sets: sets.len(),
            best_set: best.clone(),
        })
    }
}
