//! File-backed key-value store.

use super::atomic_file::AtomicFile;
use ironlog_core::error::{IronlogError, Result};
use ironlog_core::storage::KeyValueStore;
use std::path::{Path, PathBuf};

/// Stores each key as `<base_dir>/<key>.json`.
///
/// ```text
/// base_dir/
/// ├── fitnessTrackerSessions.json
/// └── fitnessTrackerActiveSession.json
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `base_dir`. The directory is created on the
    /// first write.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\'])
            && !key.starts_with('.');
        if !valid {
            return Err(IronlogError::validation(format!(
                "Invalid storage key '{}'",
                key
            )));
        }
        Ok(self.base_dir.join(format!("{}.json", key)))
    }

    fn file(&self, key: &str) -> Result<AtomicFile> {
        Ok(AtomicFile::new(self.path_for(key)?))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let file = self.file(key)?;
        let value = file.load()?;
        tracing::debug!(
            "Read key '{}' from {:?} ({})",
            key,
            file.path(),
            if value.is_some() { "present" } else { "absent" }
        );
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let file = self.file(key)?;
        file.save(value)?;
        tracing::debug!("Wrote {} bytes to key '{}'", value.len(), key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let file = self.file(key)?;
        file.remove()?;
        tracing::debug!("Removed key '{}'", key);
        Ok(())
    }
}
