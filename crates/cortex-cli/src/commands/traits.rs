use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use cortex_dice::TraitCategory;

pub fn run(sheet: &Path) -> Result<(), String> {
    let character = super::load_sheet(sheet)?;
    let name = super::display_name(&character, sheet);

    let total: usize = TraitCategory::PRIORITY
        .iter()
        .map(|c| character.set(*c).len())
        .sum();
    if total == 0 {
        println!("  {} has no traits.", name.bold());
        return Ok(());
    }

    println!("  {} {}", name.bold(), format!("({total} traits)").dimmed());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Trait", "Die", "Description"]);

    for category in TraitCategory::PRIORITY {
        for (key, entry) in character.set(category).iter() {
            let label = if entry.name.to_lowercase() == key {
                entry.name.clone()
            } else {
                format!("{} [{key}]", entry.name)
            };
            table.add_row(vec![
                category.to_string(),
                label,
                entry.die.to_string(),
                entry.description.clone().unwrap_or_default(),
            ]);
        }
    }

    println!("{table}");
    Ok(())
}
