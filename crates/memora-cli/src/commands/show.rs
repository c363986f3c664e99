use std::sync::Arc;

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use memora_core::{Exercise, LevelProgress, MemoryCategory, UserStats};
use memora_games::{SessionConfig, SessionController, SystemClock, View};

/// Number of exercises suggested on the home screen.
const RECOMMENDED: usize = 2;

/// Width of the level progress bar, in cells.
const BAR_WIDTH: usize = 20;

/// A top-level screen of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    Home,
    Train,
    Stats,
    Review,
}

impl From<Screen> for View {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Home => View::Home,
            Screen::Train => View::Train,
            Screen::Stats => View::Stats,
            Screen::Review => View::Review,
        }
    }
}

pub fn run(
    screen: Screen,
    xp: u64,
    accuracy: f64,
    sessions: u32,
    json: bool,
) -> Result<(), String> {
    let stats = UserStats::initial()
        .with_xp(xp)
        .with_accuracy(accuracy)
        .with_sessions(sessions);
    stats.validate().map_err(|e| e.to_string())?;

    let mut session = SessionController::new(SessionConfig::default(), Arc::new(SystemClock::new()))
        .map_err(|e| format!("failed to start session: {e}"))?
        .with_stats(stats);
    session.set_view(screen.into());

    match session.view() {
        View::Home => home(session.stats(), json),
        View::Train => super::exercises::run(json),
        View::Stats => stats_screen(session.stats(), json),
        View::Review => review(json),
    }
}

fn home(stats: &UserStats, json: bool) -> Result<(), String> {
    let progress = LevelProgress::of(stats);
    let recommended = Exercise::recommended(RECOMMENDED);

    if json {
        let out = serde_json::json!({ "progress": progress, "recommended": recommended });
        let out = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("  {}", "Today's Progress".bold());
    println!("  {} {:.0}%", progress_bar(progress.percent), progress.percent);
    println!("  {progress}");
    println!();
    println!("  {}", "Recommended for You".bold());
    for exercise in recommended {
        println!(
            "    {} {}  {}",
            exercise.title,
            format!("({})", exercise.category).dimmed(),
            format!("memora play {}", exercise.id).cyan()
        );
    }
    Ok(())
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn stats_screen(stats: &UserStats, json: bool) -> Result<(), String> {
    if json {
        let domains: Vec<_> = MemoryCategory::ALL
            .iter()
            .map(|c| serde_json::json!({ "category": c, "strength": c.baseline_strength() }))
            .collect();
        let out = serde_json::json!({ "stats": stats, "domains": domains });
        let out = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("  {}", "Analytics".bold());
    println!();
    super::print_stats(stats);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Memory Domain", "Strength"]);
    for category in MemoryCategory::ALL {
        table.add_row(vec![
            category.to_string(),
            format!("{}%", category.baseline_strength()),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn review(json: bool) -> Result<(), String> {
    if json {
        println!("{}", serde_json::json!({ "pending": 0 }));
        return Ok(());
    }
    println!("  {}", "Review Queue".bold());
    println!("  You've cleared all your reviews for now.");
    println!(
        "  Continue training with {}.",
        "memora play <id>".bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(progress_bar(50.0), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(progress_bar(100.0), format!("[{}]", "#".repeat(20)));
    }

    #[test]
    fn every_screen_maps_to_a_view() {
        assert_eq!(View::from(Screen::Stats), View::Stats);
        assert_eq!(View::from(Screen::Review), View::Review);
    }
}
