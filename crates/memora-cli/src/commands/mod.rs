pub mod exercises;
pub mod play;
pub mod progress;
pub mod show;
pub mod simulate;

use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use memora_core::{LevelProgress, UserStats};
use memora_games::SessionConfig;

/// Load the session config from a file (or defaults), applying a seed override.
fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<SessionConfig, String> {
    let config = match path {
        Some(path) => SessionConfig::from_file(path)
            .map_err(|e| format!("failed to load {}: {e}", path.display()))?,
        None => SessionConfig::default(),
    };
    Ok(match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

/// Render the stats rows shown after a game or progression preview.
fn stat_rows(stats: &UserStats) -> Vec<(&'static str, String)> {
    let profile = &stats.memory_profile;
    vec![
        ("Level", stats.level.to_string()),
        ("XP", stats.xp.to_string()),
        ("Progress", LevelProgress::of(stats).to_string()),
        ("Sessions", stats.total_sessions.to_string()),
        ("Accuracy", format!("{:.1}%", profile.accuracy * 100.0)),
        ("Avg Latency", format!("{}ms", profile.latency_ms)),
        ("Retention", format!("{}%", (profile.retention_rate * 100.0).round())),
        ("Streak", format!("{} days", stats.streak)),
    ]
}

/// Print the stats as a two-column table.
fn print_stats(stats: &UserStats) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Value"]);
    for (label, value) in stat_rows(stats) {
        table.add_row(vec![label.to_string(), value]);
    }
    println!("{table}");
}
