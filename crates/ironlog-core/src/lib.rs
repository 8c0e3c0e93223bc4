//! Domain layer of ironlog, a workout session tracker.
//!
//! Sessions hold exercises, exercises hold sets. [`session::SessionManager`]
//! owns the session list and the open session; [`metrics`], [`history`] and
//! [`chart`] derive read-only views from snapshots of that list.

pub mod chart;
pub mod clock;
pub mod config;
pub mod error;
pub mod history;
pub mod id;
pub mod metrics;
pub mod session;
pub mod storage;

// Re-export common types
pub use config::TrackerConfig;
pub use error::{IronlogError, Result};
pub use session::{Exercise, Session, SessionManager, SetEntry};
