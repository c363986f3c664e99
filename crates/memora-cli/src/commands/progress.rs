use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use memora_core::{UserStats, apply_score};

pub fn run(xp: u64, score: u32, accuracy: f64, sessions: u32, json: bool) -> Result<(), String> {
    let before = UserStats::initial()
        .with_xp(xp)
        .with_accuracy(accuracy)
        .with_sessions(sessions);
    before.validate().map_err(|e| e.to_string())?;
    let after = apply_score(&before, score);

    if json {
        let out = serde_json::json!({ "score": score, "before": before, "after": after });
        let out = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("  {} score {score}", "Applying".bold());
    if score > 100 {
        println!("  {}", "(scores above 100 are clamped)".dimmed());
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Before", "After"]);
    for ((label, old), (_, new)) in super::stat_rows(&before)
        .into_iter()
        .zip(super::stat_rows(&after))
    {
        table.add_row(vec![label.to_string(), old, new]);
    }
    println!("{table}");

    if after.level > before.level {
        println!();
        println!("  {} Level {}!", "Level up:".green().bold(), after.level);
    }

    Ok(())
}
