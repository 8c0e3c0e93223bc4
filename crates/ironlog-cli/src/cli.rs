use crate::input::{parse_number, parse_time};
use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use ironlog_core::chart::ChartMetric;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ironlog")]
#[command(about = "ironlog - log workouts and track progressive overload", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the session files
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file to use instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// One line typed into the interactive shell.
#[derive(Parser)]
#[command(name = "ironlog", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a workout session
    Start {
        /// Start time (defaults to now)
        #[arg(long, value_parser = parse_time)]
        at: Option<DateTime<FixedOffset>>,
        /// Planned end time; the session stays open
        #[arg(long, value_parser = parse_time)]
        end: Option<DateTime<FixedOffset>>,
        /// Body weight in kg
        #[arg(long, value_parser = parse_number)]
        body_weight: Option<f64>,
    },
    /// Record the current time as the end time without saving
    Stop,
    /// Adjust the open session's start or end time
    Times {
        #[arg(long, value_parser = parse_time)]
        start: Option<DateTime<FixedOffset>>,
        #[arg(long, value_parser = parse_time, conflicts_with = "clear_end")]
        end: Option<DateTime<FixedOffset>>,
        /// Remove the end time so the session shows as ongoing
        #[arg(long)]
        clear_end: bool,
    },
    /// End the open session and save it
    End {
        /// End time (defaults to the stopped time, then to now)
        #[arg(long, value_parser = parse_time)]
        at: Option<DateTime<FixedOffset>>,
    },
    /// Show the open session
    Status,
    /// Add or remove exercises on the open session
    Exercise {
        #[command(subcommand)]
        action: ExerciseAction,
    },
    /// Log or remove sets
    Set {
        #[command(subcommand)]
        action: SetAction,
    },
    /// Edit a saved session
    Edit {
        session_id: u64,
        #[arg(long, value_parser = parse_time)]
        start: Option<DateTime<FixedOffset>>,
        #[arg(long, value_parser = parse_time, conflicts_with = "clear_end")]
        end: Option<DateTime<FixedOffset>>,
        #[arg(long)]
        clear_end: bool,
        #[arg(long, value_parser = parse_number, conflicts_with = "clear_body_weight")]
        body_weight: Option<f64>,
        #[arg(long)]
        clear_body_weight: bool,
    },
    /// List saved sessions, newest first
    History {
        /// Only sessions from the last N days (0 shows all)
        #[arg(long)]
        days: Option<u32>,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
    },
    /// Per-exercise stats and overload indicators for a saved session
    Stats {
        session_id: u64,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Progress series for one exercise
    Chart {
        /// Exercise name
        #[arg(required = true, num_args = 1..)]
        exercise: Vec<String>,
        /// maxWeight, totalVolume or progressiveOverload
        #[arg(long, default_value_t = ChartMetric::MaxWeight)]
        metric: ChartMetric,
        #[arg(long)]
        json: bool,
    },
    /// Exercises that have logged sets
    Exercises,
    /// Suggested exercise names
    Vocabulary,
    /// Interactive prompt that keeps the session in memory
    Shell,
}

#[derive(Subcommand)]
pub enum ExerciseAction {
    /// Add an exercise by name
    Add {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Remove an exercise and its sets
    Remove {
        exercise_id: u64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum SetAction {
    /// Log a set
    Add {
        exercise_id: u64,
        #[arg(allow_negative_numbers = true)]
        reps: i64,
        #[arg(value_parser = parse_number, allow_negative_numbers = true)]
        weight: f64,
    },
    /// Remove a set by its 1-based position
    Remove { exercise_id: u64, position: usize },
}
