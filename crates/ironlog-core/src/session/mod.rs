//! Session domain module.
//!
//! This module contains all session-related domain models, the repository
//! interface, and the lifecycle/editor logic.
//!
//! # Module Structure
//!
//! - `model`: Core domain model (`Session`, `Exercise`, `SetEntry`)
//! - `duration`: Duration display rule (`SessionDuration`)
//! - `repository`: Repository trait for session persistence
//! - `manager`: Session lifecycle and set editor (`SessionManager`)

mod duration;
mod manager;
mod model;
mod repository;


// Re-export public API
pub use duration::SessionDuration;
pub use manager::{SessionEdit, SessionManager, StartSession};
pub use model::{Exercise, Session, SetEntry, validate_body_weight, validate_times};
pub use repository::SessionRepository;
