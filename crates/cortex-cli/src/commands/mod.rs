pub mod difficulties;
pub mod roll;
pub mod traits;

use std::path::Path;

use cortex_dice::CharacterTraits;

/// Read and parse a character sheet.
fn load_sheet(path: &Path) -> Result<CharacterTraits, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let character = CharacterTraits::from_json(&json).map_err(|e| e.to_string())?;
    tracing::debug!(path = %path.display(), name = %character.name, "loaded sheet");
    Ok(character)
}

/// The name to show for a character, falling back to the file stem.
fn display_name(character: &CharacterTraits, path: &Path) -> String {
    if character.name.is_empty() {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Someone".to_string())
    } else {
        character.name.clone()
    }
}
