//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs describe the JSON shape written under the storage keys. They
//! are private to the infrastructure layer and keep the domain types free of
//! storage concerns.
//!
//! ## Schema History
//! - **V1**: The browser tracker's `localStorage` layout. camelCase field
//!   names, RFC 3339 timestamps, `date` as `YYYY-MM-DD`, optional
//!   `bodyWeight` and `endTime` that may be `null` or absent.

mod session;

pub use session::{ExerciseV1, SessionV1, SetV1};
