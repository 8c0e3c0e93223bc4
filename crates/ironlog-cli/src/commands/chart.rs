//! Progress chart commands.

use crate::app::App;
use crate::display;
use anyhow::Result;
use colored::Colorize;
use ironlog_core::chart::{ChartMetric, chartable_exercises, exercise_series};

pub fn series(app: &mut App, exercise: &str, metric: ChartMetric, json: bool) -> Result<()> {
    let points = exercise_series(
        app.manager.sessions(),
        exercise,
        metric,
        app.config.comparable_weight_tolerance,
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        display::print_chart(exercise, metric, &points);
    }
    Ok(())
}

pub fn exercises(app: &mut App) -> Result<()> {
    let names = chartable_exercises(app.manager.sessions());
    if names.is_empty() {
        println!("{}", "No exercises logged yet.".bright_black());
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}
