//! Key-value storage capability.
//!
//! The tracker persists everything as JSON strings under well-known keys,
//! mirroring a browser's local storage. Backends live in the infrastructure
//! crate.

use crate::error::Result;

/// An abstract string key-value store.
///
/// Implementations overwrite the whole value on every `set`; there are no
/// partial writes or transactions.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: Key present
    /// - `Ok(None)`: Key never written
    /// - `Err(_)`: Backend failure
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
