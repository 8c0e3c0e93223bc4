//! Exercise and set editing on the open session.

use crate::app::App;
use crate::cli::{ExerciseAction, SetAction};
use crate::display;
use crate::prompt;
use anyhow::Result;
use colored::Colorize;

pub fn exercise(app: &mut App, action: ExerciseAction) -> Result<()> {
    match action {
        ExerciseAction::Add { name } => {
            let exercise = app.manager.add_exercise(&name.join(" "))?;
            println!(
                "Added {} {}",
                exercise.name.bold(),
                format!("[{}]", exercise.id).bright_black()
            );
        }
        ExerciseAction::Remove { exercise_id, yes } => {
            let removed = app.manager.remove_exercise(exercise_id, |exercise| {
                yes || prompt::confirm(&format!(
                    "Remove {} ({} sets) from the session?",
                    exercise.name,
                    exercise.sets.len()
                ))
            })?;
            match removed {
                Some(exercise) => println!("Removed {}", exercise.name),
                None => println!("{}", "Nothing removed.".bright_black()),
            }
        }
    }
    app.save_draft()?;
    Ok(())
}

pub fn set(app: &mut App, action: SetAction) -> Result<()> {
    match action {
        SetAction::Add {
            exercise_id,
            reps,
            weight,
        } => {
            let set = app.manager.add_set(exercise_id, reps, weight)?;
            println!("Logged {}", display::set_line(set));
        }
        SetAction::Remove {
            exercise_id,
            position,
        } => {
            // Position 0 maps to no index, which removes nothing
            let removed = match position.checked_sub(1) {
                Some(index) => app.manager.remove_set(exercise_id, index)?,
                None => app.manager.remove_set(exercise_id, usize::MAX)?,
            };
            match removed {
                Some(set) => println!("Removed set {}: {}", position, display::set_line(&set)),
                None => println!("{}", format!("No set at position {}.", position).bright_black()),
            }
        }
    }
    app.save_draft()?;
    Ok(())
}

pub fn vocabulary(app: &mut App) -> Result<()> {
    for name in &app.config.exercise_vocabulary {
        println!("{}", name);
    }
    Ok(())
}
