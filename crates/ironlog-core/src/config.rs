//! Tracker configuration model.
//!
//! The configuration is a plain serde struct so that the infrastructure layer
//! can load it from `config.toml`. Every field has a default, which means a
//! partial file only overrides what it mentions.

use crate::error::{IronlogError, Result};
use serde::{Deserialize, Serialize};

/// Default storage key of the persisted session list.
pub const DEFAULT_SESSIONS_KEY: &str = "fitnessTrackerSessions";

/// Default storage key of the drafted (still open) session.
pub const DEFAULT_ACTIVE_SESSION_KEY: &str = "fitnessTrackerActiveSession";

/// Runtime configuration for the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Number of sessions per history page.
    pub page_size: usize,
    /// How many page numbers the pagination controls show at once.
    pub max_visible_pages: usize,
    /// Weight distance (in weight units) under which a previous set counts
    /// as comparable when no set exists at the same position.
    pub comparable_weight_tolerance: f64,
    /// Storage key holding the persisted session list.
    pub sessions_key: String,
    /// Storage key holding the drafted open session.
    pub active_session_key: String,
    /// Suggested exercise names.
    pub exercise_vocabulary: Vec<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            max_visible_pages: 5,
            comparable_weight_tolerance: 2.5,
            sessions_key: DEFAULT_SESSIONS_KEY.to_string(),
            active_session_key: DEFAULT_ACTIVE_SESSION_KEY.to_string(),
            exercise_vocabulary: default_vocabulary(),
        }
    }
}

impl TrackerConfig {
    /// Checks the values a hand-edited file could get wrong.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(IronlogError::config("page_size must be at least 1"));
        }
        if self.max_visible_pages == 0 {
            return Err(IronlogError::config("max_visible_pages must be at least 1"));
        }
        if !self.comparable_weight_tolerance.is_finite() || self.comparable_weight_tolerance < 0.0
        {
            return Err(IronlogError::config(
                "comparable_weight_tolerance must be a non-negative number",
            ));
        }
        if self.sessions_key.trim().is_empty() || self.active_session_key.trim().is_empty() {
            return Err(IronlogError::config("storage keys must not be empty"));
        }
        if self.sessions_key == self.active_session_key {
            return Err(IronlogError::config(
                "sessions_key and active_session_key must differ",
            ));
        }
        Ok(())
    }
}

fn default_vocabulary() -> Vec<String> {
    [
        "Bench Press",
        "Squat",
        "Deadlift",
        "Overhead Press",
        "Barbell Row",
        "Pull-ups",
        "Dips",
        "Incline Bench Press",
        "Romanian Deadlift",
        "Lat Pulldown",
        "Leg Press",
        "Bicep Curls",
        "Tricep Extensions",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TrackerConfig::default();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.max_visible_pages, 5);
        assert_eq!(config.comparable_weight_tolerance, 2.5);
        assert_eq!(config.sessions_key, "fitnessTrackerSessions");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TrackerConfig = toml::from_str("page_size = 10").unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.max_visible_pages, 5);
        assert!(!config.exercise_vocabulary.is_empty());
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let config = TrackerConfig {
            page_size: 0,
            ..TrackerConfig::default()
        };
        assert!(matches!(config.validate(), Err(IronlogError::Config(_))));
    }

    #[test]
    fn test_rejects_shared_storage_key() {
        let config = TrackerConfig {
            active_session_key: DEFAULT_SESSIONS_KEY.to_string(),
            ..TrackerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
