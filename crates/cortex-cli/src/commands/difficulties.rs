use comfy_table::{ContentArrangement, Table};

use cortex_dice::DIFFICULTIES;
use cortex_dice::resolution::success::HEROIC_MARGIN;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Difficulty", "Target", "Heroic at"]);

    for (name, value) in DIFFICULTIES {
        table.add_row(vec![
            name.to_string(),
            value.to_string(),
            (value + HEROIC_MARGIN).to_string(),
        ]);
    }

    println!("{table}");
    println!("  Any number from 1 to 30 also works, e.g. `vs 12`.");
    Ok(())
}
