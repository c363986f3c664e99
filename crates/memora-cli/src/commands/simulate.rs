use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;

use memora_core::ExerciseId;
use memora_games::{ManualClock, SessionController};

use crate::palette::cue_name;

/// One presented item and what the scripted player did with it.
struct Item {
    cue: u8,
    presses: u32,
    hits: u32,
}

/// One complete n-back game.
struct Run {
    items: Vec<Item>,
    score: u32,
}

impl Run {
    fn correct(&self) -> u32 {
        self.items.iter().map(|i| i.hits).sum()
    }

    fn attempts(&self) -> u32 {
        self.items.iter().map(|i| i.presses).sum()
    }

    fn cue_names(&self) -> Vec<String> {
        self.items.iter().map(|i| cue_name(i.cue)).collect()
    }
}

pub fn run(
    seed: u64,
    press: &[usize],
    runs: usize,
    config: Option<&Path>,
    verbose: bool,
    json: bool,
) -> Result<(), String> {
    if runs == 0 {
        return Err("--runs must be at least 1".into());
    }
    let config = super::load_config(config, Some(seed))?;
    let length = config.nback.length;
    let interval = config.nback.interval();
    let n = config.nback.n;

    if let Some(&bad) = press.iter().find(|&&i| i >= length) {
        return Err(format!(
            "press index {bad} is past the end of a {length}-item sequence"
        ));
    }

    let clock = Arc::new(ManualClock::new());
    let mut session = SessionController::new(config, clock.clone())
        .map_err(|e| format!("failed to start session: {e}"))?;

    let mut played = Vec::with_capacity(runs);
    for _ in 0..runs {
        played.push(play_once(&mut session, &clock, press, interval)?);
    }
    let Some(last) = played.last() else {
        return Err("no game was played".into());
    };
    let history = session.history();

    if json {
        let out = serde_json::json!({
            "seed": seed,
            "n": n,
            "sequence": last.cue_names(),
            "presses": press,
            "correct": last.correct(),
            "attempts": last.attempts(),
            "score": last.score,
            "history": history.records(),
            "average_score": history.average_score(),
            "stats": session.stats(),
        });
        let out = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {n}-back {}",
        "Simulation".bold(),
        format!("({length} items, {runs} run(s), seed={seed})").dimmed()
    );
    println!();

    for (number, game) in played.iter().enumerate() {
        if runs > 1 {
            println!("  {}", format!("Run {}", number + 1).bold().underline());
        }
        print_run(game, n, verbose);
    }

    if runs > 1 {
        println!("  {}", "History".bold().underline());
        for record in history.records() {
            println!(
                "  {} {} {}",
                format!("#{}", record.ordinal).dimmed(),
                record.exercise,
                record.outcome
            );
        }
        if let Some(average) = history.average_score() {
            println!("  Average score: {average:.1}");
        }
        println!();
    }

    super::print_stats(session.stats());

    Ok(())
}

/// Play one n-back game to completion on the virtual clock.
fn play_once(
    session: &mut SessionController,
    clock: &ManualClock,
    press: &[usize],
    interval: Duration,
) -> Result<Run, String> {
    session.select_game(ExerciseId::NBack).map_err(|e| e.to_string())?;
    session.start_nback().map_err(|e| e.to_string())?;

    let mut items: Vec<Item> = session
        .nback()
        .map(|g| g.sequence().to_vec())
        .unwrap_or_default()
        .into_iter()
        .map(|cue| Item { cue, presses: 0, hits: 0 })
        .collect();

    let mut score = None;
    for (index, item) in items.iter_mut().enumerate() {
        for _ in press.iter().filter(|&&i| i == index) {
            item.presses += 1;
            if session.press_match().map_err(|e| e.to_string())? {
                item.hits += 1;
            }
        }
        clock.advance(interval);
        if let Some(done) = session.poll().map_err(|e| e.to_string())? {
            score = Some(done.score);
            break;
        }
    }
    let score = score.ok_or("n-back game did not finish")?;
    Ok(Run { items, score })
}

fn print_run(game: &Run, n: usize, verbose: bool) {
    if verbose {
        for (index, item) in game.items.iter().enumerate() {
            let is_match = index >= n && game.items[index].cue == game.items[index - n].cue;
            let marker = match (is_match, item.presses > 0) {
                (true, true) => "hit".green().to_string(),
                (true, false) => "missed".yellow().to_string(),
                (false, true) => "false alarm".red().to_string(),
                (false, false) => String::new(),
            };
            println!(
                "  {} {:<8} {marker}",
                format!("[{index:>2}]").dimmed(),
                cue_name(item.cue)
            );
        }
    } else {
        println!("  Sequence: {}", game.cue_names().join(" "));
    }
    println!();
    println!("  Correct: {}/{}", game.correct(), game.attempts());
    println!("  {} {}", "Score:".bold(), game.score);
    println!();
}
