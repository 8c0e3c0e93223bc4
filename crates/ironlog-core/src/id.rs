//! Id generation for sessions and exercises.

use crate::error::{IronlogError, Result};

/// Issues strictly increasing integer ids.
///
/// Ids look like millisecond timestamps so that they stay compatible with
/// records written by the browser app, but two ids issued within the same
/// millisecond never collide: each id is `max(now_ms, last + 1)`.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Makes sure later ids are greater than `id`.
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }

    /// Returns the next id given the current wall-clock time in milliseconds.
    ///
    /// # Errors
    ///
    /// `State` once `u64::MAX` has been issued or observed; the generator is
    /// left unchanged.
    pub fn next(&mut self, now_ms: i64) -> Result<u64> {
        let now = u64::try_from(now_ms).unwrap_or(0);
        let floor = self.last.checked_add(1).ok_or_else(|| {
            IronlogError::state(format!("No ids left after {}", self.last))
        })?;
        let id = now.max(floor);
        self.last = id;
        Ok(id)
    }

    pub fn last(&self) -> u64 {
        self.last
    }
}
