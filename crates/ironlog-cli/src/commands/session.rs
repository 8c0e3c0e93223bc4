//! Session lifecycle commands.

use crate::app::App;
use crate::display;
use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use colored::Colorize;
use ironlog_core::session::StartSession;

pub fn start(
    app: &mut App,
    at: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
    body_weight: Option<f64>,
) -> Result<()> {
    let start_time = at.unwrap_or_else(|| app.now());
    let session = app.manager.start_session(StartSession {
        start_time: Some(start_time),
        end_time: end,
        body_weight,
    })?;
    println!(
        "{} {}",
        "Workout session started!".bright_green(),
        format!("(session {})", session.id).bright_black()
    );
    app.save_draft()?;
    Ok(())
}

pub fn stop(app: &mut App) -> Result<()> {
    let session = app.manager.stop_session()?;
    let end = session.end_time.as_ref().map(display::time).unwrap_or_default();
    println!(
        "Stopped at {} ({}). Run `ironlog end` to save.",
        end,
        session.duration()
    );
    app.save_draft()?;
    Ok(())
}

pub fn times(
    app: &mut App,
    start: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
    clear_end: bool,
) -> Result<()> {
    let current_end = app.manager.active().and_then(|s| s.end_time);
    let end = if clear_end { None } else { end.or(current_end) };
    let session = app.manager.update_session_times(start, end)?;
    println!(
        "Session times updated: {} ({})",
        display::time(&session.start_time),
        session.duration()
    );
    app.save_draft()?;
    Ok(())
}

pub fn end(app: &mut App, at: Option<DateTime<FixedOffset>>) -> Result<()> {
    let recorded = app.manager.active().and_then(|s| s.end_time);
    let end_time = at.or(recorded).unwrap_or_else(|| app.now());
    let session = app.manager.end_session(Some(end_time))?;
    app.save_draft()?;
    println!(
        "{} {} exercises, {} sets, {}",
        "Workout session completed and saved!".bright_green(),
        session.exercises.len(),
        session.total_sets(),
        session.duration()
    );
    Ok(())
}

pub fn status(app: &mut App) -> Result<()> {
    match app.manager.active() {
        Some(session) => display::print_active(session),
        None => println!(
            "{}",
            "No workout in progress. Start one with `ironlog start`.".bright_black()
        ),
    }
    Ok(())
}
