//! Configuration service implementation.
//!
//! Loads [`TrackerConfig`] from a TOML file. A missing or blank file means
//! "all defaults"; fields absent from the file keep their defaults.

use ironlog_core::config::TrackerConfig;
use ironlog_core::error::{IronlogError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads and validates the configuration.
    ///
    /// # Errors
    ///
    /// - `Config` if the file is not valid TOML or fails validation
    /// - `Io` if the file exists but cannot be read
    pub fn load(&self) -> Result<TrackerConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {:?}, using defaults", self.path);
                return Ok(TrackerConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            tracing::warn!("Config file {:?} is empty, using defaults", self.path);
            return Ok(TrackerConfig::default());
        }

        let config: TrackerConfig = toml::from_str(&content).map_err(|e| {
            IronlogError::config(format!("Failed to parse {:?}: {}", self.path, e))
        })?;
        config.validate()?;

        tracing::debug!("Loaded config from {:?}", self.path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(temp_dir.path().join("config.toml"));
        assert_eq!(service.load().unwrap(), TrackerConfig::default());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(
            ConfigService::new(&path).load().unwrap(),
            TrackerConfig::default()
        );
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "page_size = 10\n").unwrap();

        let config = ConfigService::new(&path).load().unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.max_visible_pages, 5);
        assert_eq!(config.sessions_key, "fitnessTrackerSessions");
    }

    #[test]
    fn test_unparsable_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "page_size = \"many\"\n").unwrap();

        let err = ConfigService::new(&path).load().unwrap_err();
        assert!(matches!(err, IronlogError::Config(_)));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "page_size = 0\n").unwrap();

        let err = ConfigService::new(&path).load().unwrap_err();
        assert!(matches!(err, IronlogError::Config(_)));
    }
}
