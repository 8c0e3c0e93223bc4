//! Unified path management for ironlog files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/ironlog/                     # Config directory
//! └── config.toml                        # Tracker configuration
//!
//! ~/.local/share/ironlog/                # Data directory
//! ├── fitnessTrackerSessions.json        # Persisted session list
//! └── fitnessTrackerActiveSession.json   # Drafted open session
//! ```
//!
//! The exact roots come from `dirs` and follow each platform's conventions.

use ironlog_core::error::{IronlogError, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "ironlog";
const CONFIG_FILE: &str = "config.toml";

/// Resolved locations of the config file and the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IronlogPaths {
    config_file: PathBuf,
    data_dir: PathBuf,
}

impl IronlogPaths {
    /// Resolves the platform defaults, honouring explicit overrides.
    ///
    /// # Arguments
    ///
    /// * `config_file` - Use this file instead of `<config_dir>/ironlog/config.toml`
    /// * `data_dir` - Use this directory instead of `<data_dir>/ironlog`
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when a default is needed and the platform
    /// directory cannot be determined.
    pub fn resolve(config_file: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self> {
        let config_file = match config_file {
            Some(path) => path,
            None => Self::default_config_dir()?.join(CONFIG_FILE),
        };
        let data_dir = match data_dir {
            Some(path) => path,
            None => Self::default_data_dir()?,
        };
        Ok(Self {
            config_file,
            data_dir,
        })
    }

    /// Paths rooted entirely under `root`, for tests and portable installs.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            config_file: root.join(CONFIG_FILE),
            data_dir: root.join("data"),
        }
    }

    /// Returns `<config_dir>/ironlog`.
    pub fn default_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| IronlogError::config("Cannot determine the config directory"))
    }

    /// Returns `<data_dir>/ironlog`.
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| IronlogError::config("Cannot determine the data directory"))
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win() {
        let paths = IronlogPaths::resolve(
            Some(PathBuf::from("/tmp/custom.toml")),
            Some(PathBuf::from("/tmp/ironlog-data")),
        )
        .unwrap();
        assert_eq!(paths.config_file(), Path::new("/tmp/custom.toml"));
        assert_eq!(paths.data_dir(), Path::new("/tmp/ironlog-data"));
    }

    #[test]
    fn test_under_root() {
        let paths = IronlogPaths::under("/srv/ironlog");
        assert_eq!(paths.config_file(), Path::new("/srv/ironlog/config.toml"));
        assert_eq!(paths.data_dir(), Path::new("/srv/ironlog/data"));
    }
}
