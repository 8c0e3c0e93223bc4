//! Interactive prompt.
//!
//! Each line is parsed like a command-line invocation without the program
//! name, so `exercise add Bench Press` works as it does from the shell.
//! Arguments are split on whitespace; quoting is not supported.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::app::App;
use crate::display;
use crate::cli::{Commands, ShellLine};
use ironlog_core::chart::chartable_exercises;

const COMMANDS: [&str; 16] = [
    "start",
    "stop",
    "times",
    "end",
    "status",
    "exercise add",
    "exercise remove",
    "set add",
    "set remove",
    "edit",
    "history",
    "stats",
    "chart",
    "exercises",
    "vocabulary",
    "quit",
];

/// Completion, highlighting and hints for the prompt.
struct ShellHelper {
    vocabulary: Vec<String>,
    logged: Vec<String>,
}

impl ShellHelper {
    fn new(vocabulary: Vec<String>, logged: Vec<String>) -> Self {
        Self { vocabulary, logged }
    }

    /// Replacement start and candidates for the text before the cursor.
    fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        for (prefix, names) in [("exercise add ", &self.vocabulary), ("chart ", &self.logged)] {
            if let Some(partial) = line.strip_prefix(prefix) {
                let partial = partial.to_lowercase();
                let matches = names
                    .iter()
                    .filter(|name| name.to_lowercase().starts_with(&partial))
                    .cloned()
                    .collect();
                return (prefix.len(), matches);
            }
        }

        let matches = COMMANDS
            .iter()
            .filter(|command| command.starts_with(line))
            .map(|command| command.to_string())
            .collect();
        (0, matches)
    }
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match line.split_once(' ') {
            Some((command, rest)) => Owned(format!("{} {}", command.bright_cyan(), rest)),
            None if !line.is_empty() => Owned(line.bright_cyan().to_string()),
            None => Borrowed(line),
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        let (start, matches) = self.candidates(line);
        let typed = line.len() - start;
        matches
            .into_iter()
            .find(|candidate| candidate.len() > typed && candidate.starts_with(&line[start..]))
            .map(|candidate| candidate[typed..].to_string())
    }
}

impl Validator for ShellHelper {}

pub fn run(app: &mut App) -> Result<()> {
    let helper = ShellHelper::new(
        app.config.exercise_vocabulary.clone(),
        chartable_exercises(app.manager.sessions()),
    );
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== ironlog ===".bright_magenta().bold());
    println!(
        "{}",
        "Type a command such as 'start' or 'set add 1 8 60', or 'quit' to exit.".bright_black()
    );
    if let Some(session) = app.manager.active() {
        println!("{}", format!("Session {} is in progress.", session.id).yellow());
    }
    println!();

    loop {
        match rl.readline("ironlog> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "quit" || trimmed == "exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match ShellLine::try_parse_from(trimmed.split_whitespace()) {
                    Ok(ShellLine {
                        command: Commands::Shell,
                    }) => println!("{}", "Already in the shell.".bright_black()),
                    Ok(parsed) => {
                        if let Err(e) = super::dispatch(app, parsed.command) {
                            eprintln!("{}", display::error_line(&e));
                        }
                        if let Some(helper) = rl.helper_mut() {
                            helper.logged = chartable_exercises(app.manager.sessions());
                        }
                    }
                    Err(e) => {
                        let _ = e.print();
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if app.manager.has_active() {
        println!("{}", "The open session is kept as a draft.".bright_black());
    }
    Ok(())
}
