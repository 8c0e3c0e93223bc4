//! Metrics engine.
//!
//! Derives per-exercise stats (max weight, volume, estimated one-rep max)
//! and the progressive-overload score from a session's sets.

mod overload;
mod stats;

pub use overload::{
    DEFAULT_WEIGHT_TOLERANCE, OverloadIndicator, find_comparable_set, progressive_overload_score,
    set_contribution,
};
pub use stats::{ExerciseStats, best_set, estimated_one_rep_max};

/// Rounds to one decimal place, halves toward positive infinity.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::round_tenth;

    #[test]
    fn test_round_tenth_half_up() {
        assert_eq!(round_tenth(116.666_666), 116.7);
        assert_eq!(round_tenth(5.0), 5.0);
        assert_eq!(round_tenth(0.25), 0.3);
        assert_eq!(round_tenth(-0.25), -0.2);
        assert_eq!(round_tenth(-0.26), -0.3);
    }
}
