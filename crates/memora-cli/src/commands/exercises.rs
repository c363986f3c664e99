use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use memora_core::Exercise;

pub fn run(json: bool) -> Result<(), String> {
    let catalog = Exercise::catalog();

    if json {
        let out = serde_json::to_string_pretty(catalog).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Category", "Difficulty", "Description"]);

    for exercise in catalog {
        let id = if exercise.id.is_playable() {
            exercise.id.to_string()
        } else {
            format!("{} (soon)", exercise.id)
        };
        table.add_row(vec![
            id,
            exercise.title.to_string(),
            exercise.category.to_string(),
            format!("{}/3", exercise.difficulty),
            exercise.description.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} exercises, play one with {}",
        catalog.len(),
        "memora play <id>".bold()
    );

    Ok(())
}
