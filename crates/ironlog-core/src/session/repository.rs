//! Session repository trait.
//!
//! Defines the interface for session persistence operations.

use super::model::Session;
use crate::error::Result;

/// An abstract repository for session persistence.
///
/// The persisted state is one list of completed sessions that is always read
/// and written as a whole. A second, independent slot holds the drafted open
/// session for front-ends that outlive a single process.
pub trait SessionRepository: Send + Sync {
    /// Loads every persisted session in storage order.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Session>)`: All sessions (empty when nothing was stored yet)
    /// - `Err(_)`: Storage or decoding failure
    fn load_all(&self) -> Result<Vec<Session>>;

    /// Overwrites the persisted session list.
    fn save_all(&self, sessions: &[Session]) -> Result<()>;

    /// Loads the drafted open session, if any.
    fn load_active(&self) -> Result<Option<Session>>;

    /// Stores or clears the drafted open session.
    fn save_active(&self, session: Option<&Session>) -> Result<()>;
}
