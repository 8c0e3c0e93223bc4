//! Progressive-overload scoring.
//!
//! A session's sets for one exercise are compared against the sets of the
//! immediately preceding session for the same exercise. The score rewards
//! more reps at the same load, or more load with at most a small rep loss.

use super::round_tenth;
use crate::session::SetEntry;
use serde::Serialize;
use std::fmt;

/// Default weight distance for the nearest-weight fallback match.
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 2.5;

/// Reps credited per extra rep at an unchanged weight.
const REP_GAIN_CREDIT: f64 = 0.5;

/// Penalty per rep lost when the weight went up.
const REP_LOSS_PENALTY: f64 = 0.2;

/// A heavier set may lose at most this many reps and still count.
const MAX_REP_LOSS: i64 = 3;

/// Finds the previous set to compare `current` (at `index`) against.
///
/// Prefers the previous set at the same position; otherwise the first
/// previous set whose weight is within `tolerance` of the current weight.
pub fn find_comparable_set<'a>(
    previous: &'a [SetEntry],
    index: usize,
    current: &SetEntry,
    tolerance: f64,
) -> Option<&'a SetEntry> {
    previous.get(index).or_else(|| {
        previous
            .iter()
            .find(|p| (p.weight - current.weight).abs() <= tolerance)
    })
}

/// Score contribution of one comparable pair.
pub fn set_contribution(current: &SetEntry, previous: &SetEntry) -> f64 {
    let current_reps = i64::from(current.reps);
    let previous_reps = i64::from(previous.reps);

    if current.weight == previous.weight && current_reps > previous_reps {
        (current_reps - previous_reps) as f64 * REP_GAIN_CREDIT
    } else if current.weight > previous.weight && current_reps >= previous_reps - MAX_REP_LOSS {
        let rep_loss = (previous_reps - current_reps).max(0) as f64;
        (current.weight - previous.weight) - rep_loss * REP_LOSS_PENALTY
    } else {
        0.0
    }
}

/// Scores `current` sets against `previous` sets, rounded to one decimal.
///
/// Sets without a comparable previous set contribute nothing.
pub fn progressive_overload_score(
    current: &[SetEntry],
    previous: &[SetEntry],
    tolerance: f64,
) -> f64 {
    let total: f64 = current
        .iter()
        .enumerate()
        .filter_map(|(index, set)| {
            find_comparable_set(previous, index, set, tolerance)
                .map(|prev| set_contribution(set, prev))
        })
        .sum();
    round_tenth(total)
}

/// Label for how a session compares with its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "score")]
pub enum OverloadIndicator {
    /// No earlier session for this exercise
    FirstTime,
    Progress(f64),
    Maintenance,
    Regression(f64),
}

impl OverloadIndicator {
    /// Classifies an already computed score.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Self::Progress(score)
        } else if score == 0.0 {
            Self::Maintenance
        } else {
            Self::Regression(score)
        }
    }

    /// Compares `current` sets with an optional predecessor's sets.
    ///
    /// Without a predecessor the result is always `FirstTime`; no score is
    /// computed.
    pub fn classify(current: &[SetEntry], previous: Option<&[SetEntry]>, tolerance: f64) -> Self {
        match previous {
            None => Self::FirstTime,
            Some(previous) => {
                Self::from_score(progressive_overload_score(current, previous, tolerance))
            }
        }
    }

    /// The score behind the label; `FirstTime` reports 0.
    pub fn score(&self) -> f64 {
        match self {
            Self::Progress(score) | Self::Regression(score) => *score,
            Self::FirstTime | Self::Maintenance => 0.0,
        }
    }

    /// Stable machine-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstTime => "first-time",
            Self::Progress(_) => "progress",
            Self::Maintenance => "maintenance",
            Self::Regression(_) => "regression",
        }
    }
}

impl fmt::Display for OverloadIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstTime => write!(f, "First Time"),
            Self::Progress(score) => write!(f, "Progressive Overload (+{})", score),
            Self::Maintenance => write!(f, "Maintenance"),
            Self::Regression(_) => write!(f, "Regression"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn set(reps: u32, weight: f64) -> SetEntry {
        SetEntry {
            reps,
            weight,
            timestamp: DateTime::parse_from_rfc3339("2024-05-01T18:00:00Z").unwrap(),
        }
    }

    fn score(current: &[SetEntry], previous: &[SetEntry]) -> f64 {
        progressive_overload_score(current, previous, DEFAULT_WEIGHT_TOLERANCE)
    }

    #[test]
    fn test_heavier_same_reps_is_progress() {
        let previous = vec![set(8, 60.0)];
        let current = vec![set(8, 65.0)];
        assert_eq!(score(&current, &previous), 5.0);

        let indicator = OverloadIndicator::classify(&current, Some(&previous), 2.5);
        assert_eq!(indicator, OverloadIndicator::Progress(5.0));
        assert_eq!(indicator.to_string(), "Progressive Overload (+5)");
    }

    #[test]
    fn test_fewer_reps_same_weight_is_maintenance() {
        let previous = vec![set(10, 60.0)];
        let current = vec![set(6, 60.0)];
        assert_eq!(score(&current, &previous), 0.0);
        assert_eq!(
            OverloadIndicator::classify(&current, Some(&previous), 2.5),
            OverloadIndicator::Maintenance
        );
    }

    #[test]
    fn test_more_reps_same_weight() {
        let previous = vec![set(8, 60.0), set(8, 60.0)];
        let current = vec![set(10, 60.0), set(9, 60.0)];
        // (2 × 0.5) + (1 × 0.5)
        assert_eq!(score(&current, &previous), 1.5);
    }

    #[test]
    fn test_heavier_with_small_rep_loss_is_penalised() {
        let previous = vec![set(8, 60.0)];
        let current = vec![set(6, 62.5)];
        // 2.5 - 2 × 0.2
        assert_eq!(score(&current, &previous), 2.1);
    }

    #[test]
    fn test_heavier_with_large_rep_loss_scores_nothing() {
        let previous = vec![set(10, 60.0)];
        let current = vec![set(6, 70.0)];
        assert_eq!(score(&current, &previous), 0.0);
    }

    #[test]
    fn test_small_increase_with_rep_loss_can_regress() {
        let previous = vec![set(8, 60.0)];
        let current = vec![set(5, 60.5)];
        // 0.5 - 3 × 0.2 = -0.1
        let value = score(&current, &previous);
        assert_eq!(value, -0.1);
        assert_eq!(
            OverloadIndicator::from_score(value),
            OverloadIndicator::Regression(-0.1)
        );
    }

    #[test]
    fn test_first_time_never_computes() {
        let current = vec![set(8, 60.0)];
        let indicator = OverloadIndicator::classify(&current, None, 2.5);
        assert_eq!(indicator, OverloadIndicator::FirstTime);
        assert_eq!(indicator.score(), 0.0);
        assert_eq!(indicator.as_str(), "first-time");
    }

    #[test]
    fn test_positional_match_is_preferred() {
        let previous = vec![set(8, 100.0), set(8, 60.0)];
        let current = set(8, 61.0);
        let matched = find_comparable_set(&previous, 0, &current, 2.5).unwrap();
        assert_eq!(matched.weight, 100.0);
    }

    #[test]
    fn test_fallback_matches_nearest_weight_within_tolerance() {
        let previous = vec![set(8, 100.0), set(8, 60.0)];
        let current = set(8, 62.5);
        let matched = find_comparable_set(&previous, 2, &current, 2.5).unwrap();
        assert_eq!(matched.weight, 60.0);

        let too_far = set(8, 63.0);
        assert!(find_comparable_set(&previous, 2, &too_far, 2.5).is_none());
    }

    #[test]
    fn test_extra_sets_use_fallback_or_score_zero() {
        let previous = vec![set(8, 60.0)];
        // Second set has no positional partner; 61 is within 2.5 of 60
        let current = vec![set(8, 60.0), set(9, 61.0), set(5, 100.0)];
        // set 0: same weight same reps → 0
        // set 1: 61 vs 60, 9 ≥ 5 → 1.0
        // set 2: nothing within 2.5 of 100 → 0
        assert_eq!(score(&current, &previous), 1.0);
    }

    #[test]
    fn test_score_rounds_to_one_decimal() {
        let previous = vec![set(8, 60.0), set(8, 60.0), set(8, 60.0)];
        let current = vec![set(7, 60.1), set(7, 60.1), set(7, 60.1)];
        // 3 × (0.1 - 0.2) = -0.3 after rounding
        assert_eq!(score(&current, &previous), -0.3);
    }
}
