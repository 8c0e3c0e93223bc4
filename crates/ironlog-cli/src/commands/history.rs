//! History listing, per-session stats and retroactive edits.

use crate::app::App;
use crate::display;
use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use colored::Colorize;
use ironlog_core::error::IronlogError;
use ironlog_core::history::{HistoryQuery, SessionSummary, query_history, summarize_session};
use ironlog_core::session::SessionEdit;

pub struct EditArgs {
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
    pub clear_end: bool,
    pub body_weight: Option<f64>,
    pub clear_body_weight: bool,
}

impl EditArgs {
    /// Fills unspecified fields from the stored session, like a pre-filled
    /// edit form.
    fn into_edit(self, current: Option<&ironlog_core::Session>) -> SessionEdit {
        let end_time = if self.clear_end {
            None
        } else {
            self.end.or_else(|| current.and_then(|s| s.end_time))
        };
        let body_weight = if self.clear_body_weight {
            None
        } else {
            self.body_weight.or_else(|| current.and_then(|s| s.body_weight))
        };
        SessionEdit {
            start_time: self.start.or_else(|| current.map(|s| s.start_time)),
            end_time,
            body_weight,
        }
    }
}

pub fn edit(app: &mut App, session_id: u64, args: EditArgs) -> Result<()> {
    let Some(current) = app.manager.find_session(session_id) else {
        return Err(IronlogError::validation(format!("Unknown session id {}", session_id)).into());
    };
    let edit = args.into_edit(Some(current));
    let session = app.manager.edit_session(session_id, edit)?;
    println!(
        "{} {}  {}",
        "Session updated!".bright_green(),
        session.date,
        session.duration()
    );
    Ok(())
}

pub fn list(app: &mut App, days: Option<u32>, page: i64) -> Result<()> {
    let sessions = app.manager.sessions();
    let query = HistoryQuery::from_config(&app.config)
        .with_filter_days(days)
        .with_page(page);
    let history = query_history(sessions, &query, app.today())?;
    let tolerance = app.config.comparable_weight_tolerance;
    let summaries: Vec<SessionSummary> = history
        .items
        .iter()
        .map(|session| summarize_session(sessions, session, tolerance))
        .collect();
    display::print_history(&history, &summaries);
    Ok(())
}

pub fn stats(app: &mut App, session_id: u64, json: bool) -> Result<()> {
    let sessions = app.manager.sessions();
    let session = app.manager.get_session(session_id)?;
    let summary = summarize_session(sessions, session, app.config.comparable_weight_tolerance);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        display::print_summary(&summary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironlog_core::Session;

    fn stored() -> Session {
        let start = DateTime::parse_from_rfc3339("2024-01-01T18:00:00+00:00").unwrap();
        let end = DateTime::parse_from_rfc3339("2024-01-01T19:00:00+00:00").unwrap();
        Session::new(1, start, Some(end), Some(80.0)).unwrap()
    }

    fn args() -> EditArgs {
        EditArgs {
            start: None,
            end: None,
            clear_end: false,
            body_weight: None,
            clear_body_weight: false,
        }
    }

    #[test]
    fn test_unspecified_fields_keep_stored_values() {
        let session = stored();
        let edit = args().into_edit(Some(&session));
        assert_eq!(edit.start_time, Some(session.start_time));
        assert_eq!(edit.end_time, session.end_time);
        assert_eq!(edit.body_weight, Some(80.0));
    }

    #[test]
    fn test_clear_flags_remove_values() {
        let session = stored();
        let edit = EditArgs {
            clear_end: true,
            clear_body_weight: true,
            ..args()
        }
        .into_edit(Some(&session));
        assert_eq!(edit.end_time, None);
        assert_eq!(edit.body_weight, None);
    }

    #[test]
    fn test_unknown_session_leaves_start_missing() {
        assert_eq!(args().into_edit(None).start_time, None);
    }
}
