//! Progress chart series.
//!
//! The core only supplies the data points; drawing is up to the front-end.

use crate::error::{IronlogError, Result};
use crate::history::chronological;
use crate::metrics::{ExerciseStats, progressive_overload_score};
use crate::session::{Session, SetEntry};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Which number a chart plots per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartMetric {
    #[default]
    MaxWeight,
    TotalVolume,
    ProgressiveOverload,
}

impl ChartMetric {
    /// Axis label for the metric.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MaxWeight => "Max Weight (kg)",
            Self::TotalVolume => "Total Volume (kg)",
            Self::ProgressiveOverload => "Progressive Overload Score",
        }
    }
}

impl fmt::Display for ChartMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MaxWeight => "maxWeight",
            Self::TotalVolume => "totalVolume",
            Self::ProgressiveOverload => "progressiveOverload",
        };
        f.write_str(name)
    }
}

impl FromStr for ChartMetric {
    type Err = IronlogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "maxWeight" | "max-weight" | "max_weight" => Ok(Self::MaxWeight),
            "totalVolume" | "total-volume" | "total_volume" => Ok(Self::TotalVolume),
            "progressiveOverload" | "progressive-overload" | "progressive_overload" => {
                Ok(Self::ProgressiveOverload)
            }
            other => Err(IronlogError::validation(format!(
                "Unknown chart metric '{}'",
                other
            ))),
        }
    }
}

/// Extra numbers shown in a point's tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipExtras {
    pub total_sets: usize,
    pub max_weight: f64,
    pub total_volume: f64,
    /// Score against the previous point; `None` for the first point
    pub progressive_overload: Option<f64>,
}

/// One chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub session_id: u64,
    pub value: f64,
    pub tooltip_extras: TooltipExtras,
}

/// Sorted, de-duplicated names of exercises that have at least one set.
pub fn chartable_exercises(sessions: &[Session]) -> Vec<String> {
    sessions
        .iter()
        .flat_map(|s| s.exercises.iter())
        .filter(|e| e.has_sets())
        .map(|e| e.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Data points for `exercise_name`, oldest first.
///
/// Each session contributes its first entry of the exercise that has sets.
/// For [`ChartMetric::ProgressiveOverload`] the first point is 0 and every
/// later point is scored against the point before it.
pub fn exercise_series(
    sessions: &[Session],
    exercise_name: &str,
    metric: ChartMetric,
    tolerance: f64,
) -> Vec<ChartPoint> {
    let performed: Vec<(&Session, &[SetEntry], ExerciseStats)> = chronological(sessions)
        .into_iter()
        .filter_map(|session| {
            let exercise = session.performed_exercise(exercise_name)?;
            let stats = ExerciseStats::from_sets(&exercise.sets).ok()?;
            Some((session, exercise.sets.as_slice(), stats))
        })
        .collect();

    performed
        .iter()
        .enumerate()
        .map(|(index, (session, sets, stats))| {
            let overload = index
                .checked_sub(1)
                .map(|prev| progressive_overload_score(sets, performed[prev].1, tolerance));
            let value = match metric {
                ChartMetric::MaxWeight => stats.max_weight,
                ChartMetric::TotalVolume => stats.total_volume,
                ChartMetric::ProgressiveOverload => overload.unwrap_or(0.0),
            };
            ChartPoint {
                date: session.date,
                session_id: session.id,
                value,
                tooltip_extras: TooltipExtras {
                    total_sets: stats.total_sets,
                    max_weight: stats.max_weight,
                    total_volume: stats.total_volume,
                    progressive_overload: overload,
                },
            }
        })
        .collect()
}
