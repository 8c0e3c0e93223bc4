//! Terminal rendering.

use chrono::{DateTime, FixedOffset};
use colored::{ColoredString, Colorize};
use ironlog_core::IronlogError;
use ironlog_core::chart::{ChartMetric, ChartPoint};
use ironlog_core::history::{HistoryPage, SessionSummary};
use ironlog_core::metrics::OverloadIndicator;
use ironlog_core::session::{Session, SetEntry};

const BAR_WIDTH: usize = 40;

/// Formats a number without a trailing `.0`, the way a browser prints it.
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

pub fn time(value: &DateTime<FixedOffset>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

pub fn set_line(set: &SetEntry) -> String {
    format!("{} reps × {} kg", set.reps, number(set.weight))
}

/// A bar of `width` cells scaled so that `max` fills it.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

/// One-line error for the interactive prompt. Input mistakes are shown as
/// their message alone, anything else with its full chain.
pub fn error_line(error: &anyhow::Error) -> ColoredString {
    match error.downcast_ref::<IronlogError>() {
        Some(e) if e.is_user_facing() => e.to_string().yellow(),
        _ => format!("Error: {:#}", error).red(),
    }
}

pub fn indicator(indicator: &OverloadIndicator) -> ColoredString {
    let text = indicator.to_string();
    match indicator {
        OverloadIndicator::FirstTime => text.bright_blue(),
        OverloadIndicator::Progress(_) => text.green(),
        OverloadIndicator::Maintenance => text.yellow(),
        OverloadIndicator::Regression(_) => text.red(),
    }
}

/// The open session with numbered exercises and sets.
pub fn print_active(session: &Session) {
    println!(
        "{} {}",
        "Workout in progress".bright_magenta().bold(),
        format!("(session {})", session.id).bright_black()
    );
    println!("  Date:     {}", session.date);
    println!("  Start:    {}", time(&session.start_time));
    if let Some(end) = &session.end_time {
        println!("  End:      {}", time(end));
    }
    println!("  Duration: {}", session.duration());
    if let Some(body_weight) = session.body_weight {
        println!("  Body:     {} kg", number(body_weight));
    }

    if session.exercises.is_empty() {
        println!("{}", "  No exercises yet. Add one with `ironlog exercise add <name>`.".bright_black());
        return;
    }
    for exercise in &session.exercises {
        println!();
        println!(
            "  {} {}",
            exercise.name.bold(),
            format!("[{}]", exercise.id).bright_black()
        );
        if exercise.sets.is_empty() {
            println!("{}", "    no sets".bright_black());
        }
        for (position, set) in exercise.sets.iter().enumerate() {
            println!("    {}. {}", position + 1, set_line(set));
        }
    }
}

/// One history card.
pub fn print_summary(summary: &SessionSummary) {
    let mut header = format!("{}  {}", summary.date, summary.duration);
    if let Some(body_weight) = summary.body_weight {
        header.push_str(&format!("  {} kg", number(body_weight)));
    }
    println!(
        "{} {}",
        header.bold(),
        format!("[{}]", summary.session_id).bright_black()
    );
    println!(
        "  {} exercises, {} sets",
        summary.exercise_count, summary.total_sets
    );
    for exercise in &summary.exercises {
        let stats = &exercise.stats;
        println!(
            "  {:<20} {} sets, max {} kg, volume {} kg, best {} (1RM ≈ {})  {}",
            exercise.name,
            stats.total_sets,
            number(stats.max_weight),
            number(stats.total_volume),
            set_line(&stats.best_set),
            number(stats.estimated_one_rm),
            indicator(&exercise.indicator)
        );
    }
}

pub fn print_history(page: &HistoryPage<'_>, summaries: &[SessionSummary]) {
    let Some((first, last)) = page.pagination.showing() else {
        println!("{}", "No sessions found.".bright_black());
        return;
    };
    for summary in summaries {
        print_summary(summary);
        println!();
    }

    let window: Vec<String> = page
        .page_window
        .iter()
        .map(|&number| {
            if number == page.pagination.page {
                format!("[{}]", number).bold().to_string()
            } else {
                number.to_string()
            }
        })
        .collect();
    println!(
        "Showing {}-{} of {} sessions   {}{}{}",
        first,
        last,
        page.total_count(),
        if page.pagination.has_previous() { "‹ " } else { "" },
        window.join(" "),
        if page.pagination.has_next() { " ›" } else { "" },
    );
}

pub fn print_chart(exercise: &str, metric: ChartMetric, points: &[ChartPoint]) {
    if points.is_empty() {
        println!("{}", format!("No logged sets for {}.", exercise).bright_black());
        return;
    }
    println!("{} - {}", exercise.bold(), metric.label());
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    for point in points {
        let extras = &point.tooltip_extras;
        let overload = extras
            .progressive_overload
            .map(number)
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "  {}  {:>8}  {:<width$}  {}",
            point.date,
            number(point.value),
            bar(point.value, max, BAR_WIDTH).cyan(),
            format!(
                "sets {}, max {} kg, volume {} kg, overload {}",
                extras.total_sets,
                number(extras.max_weight),
                number(extras.total_volume),
                overload
            )
            .bright_black(),
            width = BAR_WIDTH
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_drops_integral_fraction() {
        assert_eq!(number(60.0), "60");
        assert_eq!(number(62.5), "62.5");
        assert_eq!(number(116.7), "116.7");
        assert_eq!(number(-0.4), "-0.4");
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(10.0, 10.0, 4).chars().count(), 4);
        assert_eq!(bar(5.0, 10.0, 4).chars().count(), 2);
        // Tiny positive values still get one cell
        assert_eq!(bar(0.01, 10.0, 4).chars().count(), 1);
        assert!(bar(0.0, 10.0, 4).is_empty());
        assert!(bar(-3.0, 10.0, 4).is_empty());
    }

    #[test]
    fn test_error_line_text() {
        let user = anyhow::Error::from(IronlogError::not_found("session", "9"));
        assert!(error_line(&user).to_string().contains("Entity not found: session '9'"));

        let internal = anyhow::Error::from(IronlogError::io("disk full"));
        assert!(error_line(&internal).to_string().contains("Error: IO error: disk full"));
    }

    #[test]
    fn test_time_format() {
        let value = DateTime::parse_from_rfc3339("2024-01-01T18:05:00+09:00").unwrap();
        assert_eq!(time(&value), "2024-01-01 18:05");
    }
}
