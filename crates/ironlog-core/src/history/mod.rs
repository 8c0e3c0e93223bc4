//! History query.
//!
//! Filters sessions by recency, sorts them newest first, paginates them and
//! builds the per-session summaries the history list displays.

mod pagination;
mod query;
mod summary;

pub use pagination::{Pagination, page_window};
pub use query::{HistoryPage, HistoryQuery, filter_recent, query_history};
pub use summary::{
    ExerciseSummary, SessionSummary, chronological, overload_indicator_for, previous_performance,
    summarize_session,
};
