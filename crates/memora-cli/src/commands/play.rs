use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use tracing::debug;

use memora_core::{Exercise, ExerciseId};
use memora_games::{Completion, SessionController, SystemClock};

/// Typed on its own line to abandon a paired-associates game.
const CANCEL_COMMAND: &str = ":cancel";

pub fn run(exercise: &str, seed: Option<u64>, config: Option<&Path>) -> Result<(), String> {
    let id: ExerciseId = exercise.parse().map_err(|e| format!("{e}"))?;
    let config = super::load_config(config, seed)?;

    let mut session = SessionController::new(config, Arc::new(SystemClock::new()))
        .map_err(|e| format!("failed to start session: {e}"))?;
    session.select_game(id).map_err(|e| e.to_string())?;
    debug!(exercise = %id, seed = ?session.config().seed, "play session started");

    let completion = match id {
        ExerciseId::NBack => crate::tui::run_nback(&mut session)?,
        ExerciseId::PairedAssociates => {
            let stdin = io::stdin();
            run_paired(&mut session, stdin.lock(), io::stdout())?
        }
        other => {
            session.on_game_cancel().map_err(|e| e.to_string())?;
            return Err(format!("{other} is not playable yet"));
        }
    };

    match completion {
        Some(completion) => {
            println!();
            println!(
                "  {} {} with score {}",
                "Completed".green().bold(),
                Exercise::get(completion.exercise).title,
                completion.score
            );
            println!();
            super::print_stats(session.stats());
        }
        None => println!("  {} Stats unchanged.", "Game cancelled.".yellow()),
    }

    Ok(())
}

/// Run the mounted paired-associates game as a line-based dialogue.
///
/// End of input or `:cancel` abandons the game.
pub fn run_paired<R: BufRead, W: Write>(
    session: &mut SessionController,
    mut input: R,
    mut out: W,
) -> Result<Option<Completion>, String> {
    let pairs = match session.paired() {
        Some(game) => game.pairs().to_vec(),
        None => return Err("no paired-associates game is active".into()),
    };

    writeln!(out, "  {} Study these pairs:", "Paired Associates".bold()).map_err(|e| e.to_string())?;
    writeln!(out).map_err(|e| e.to_string())?;
    for pair in &pairs {
        writeln!(out, "    {:<12} {} {}", pair.cue, "→".dimmed(), pair.target.cyan())
            .map_err(|e| e.to_string())?;
    }
    writeln!(out).map_err(|e| e.to_string())?;
    write!(out, "  Press Enter when ready to test ({CANCEL_COMMAND} to quit) ")
        .map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    if !read_answer(&mut input, &mut line)? {
        return cancel(session);
    }
    session.begin_test().map_err(|e| e.to_string())?;
    writeln!(out).map_err(|e| e.to_string())?;

    loop {
        let Some(cue) = session.paired().and_then(|g| g.current_cue()).map(str::to_string) else {
            return Err("paired-associates game ended unexpectedly".into());
        };
        write!(out, "  What was paired with {}? ", cue.bold()).map_err(|e| e.to_string())?;
        out.flush().map_err(|e| e.to_string())?;

        if !read_answer(&mut input, &mut line)? {
            return cancel(session);
        }
        if let Some(completion) = session.submit_answer(&line).map_err(|e| e.to_string())? {
            return Ok(Some(completion));
        }
    }
}

/// Read one line into `line`. Returns false on end of input or the cancel command.
fn read_answer<R: BufRead>(input: &mut R, line: &mut String) -> Result<bool, String> {
    line.clear();
    match input.read_line(line) {
        Ok(0) => Ok(false),
        Ok(_) => Ok(line.trim() != CANCEL_COMMAND),
        Err(e) => Err(e.to_string()),
    }
}

fn cancel(session: &mut SessionController) -> Result<Option<Completion>, String> {
    session.on_game_cancel().map_err(|e| e.to_string())?;
    Ok(None)
}
