pub mod chart;
pub mod editor;
pub mod history;
pub mod session;
pub mod shell;

use crate::app::App;
use crate::cli::Commands;
use anyhow::Result;

/// Runs one command against `app`.
pub fn dispatch(app: &mut App, command: Commands) -> Result<()> {
    match command {
        Commands::Start {
            at,
            end,
            body_weight,
        } => session::start(app, at, end, body_weight),
        Commands::Stop => session::stop(app),
        Commands::Times {
            start,
            end,
            clear_end,
        } => session::times(app, start, end, clear_end),
        Commands::End { at } => session::end(app, at),
        Commands::Status => session::status(app),
        Commands::Exercise { action } => editor::exercise(app, action),
        Commands::Set { action } => editor::set(app, action),
        Commands::Edit {
            session_id,
            start,
            end,
            clear_end,
            body_weight,
            clear_body_weight,
        } => history::edit(
            app,
            session_id,
            history::EditArgs {
                start,
                end,
                clear_end,
                body_weight,
                clear_body_weight,
            },
        ),
        Commands::History { days, page } => history::list(app, days, page),
        Commands::Stats { session_id, json } => history::stats(app, session_id, json),
        Commands::Chart {
            exercise,
            metric,
            json,
        } => chart::series(app, &exercise.join(" "), metric, json),
        Commands::Exercises => chart::exercises(app),
        Commands::Vocabulary => editor::vocabulary(app),
        Commands::Shell => shell::run(app),
    }
}
