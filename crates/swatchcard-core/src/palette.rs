use std::path::Path;

use serde::Deserialize;

use crate::color::{is_hex_color, PaletteEntry};
use crate::ConfigError;

#[derive(Debug, Deserialize)]
pub struct PaletteFile {
    #[serde(default)]
    pub entries: Vec<PaletteEntry>,
}

/// Load and validate a palette override from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_palette(path: &Path) -> Result<Vec<PaletteEntry>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PaletteFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_palette(&content)
}

fn parse_palette(content: &str) -> Result<Vec<PaletteEntry>, ConfigError> {
    let file: PaletteFile = serde_yaml::from_str(content)?;
    validate_palette(&file)?;
    Ok(file.entries)
}

/// Missing labels or hexes are tolerated (the color map skips them), but a
/// hex that is present must look like one.
fn validate_palette(file: &PaletteFile) -> Result<(), ConfigError> {
    for entry in &file.entries {
        let Some(hex) = entry.hex.as_deref().map(str::trim) else {
            continue;
        };
        if hex.is_empty() {
            continue;
        }
        if !is_hex_color(hex) {
            return Err(ConfigError::Validation(format!(
                "palette entry '{}' has invalid hex '{}'",
                entry.label.as_deref().unwrap_or("<unlabeled>"),
                hex
            )));
        }
    }
    Ok(())
}
