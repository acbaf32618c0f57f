use std::path::Path;

use serde::Deserialize;

use super::models::Magazine;
use crate::Result;

/// TOML layout: a list of `[[magazine]]` tables
#[derive(Debug, Deserialize)]
struct MagazineFile {
    #[serde(default)]
    magazine: Vec<Magazine>,
}

/// Load magazines from a `.json` or `.toml` file
pub fn load_magazines(path: &Path) -> Result<Vec<Magazine>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let content = match extension.as_deref() {
        Some("json") | Some("toml") => std::fs::read_to_string(path)?,
        _ => {
            return Err(crate::Error::UnsupportedFormat(
                path.display().to_string(),
            ))
        }
    };

    let magazines = if extension.as_deref() == Some("json") {
        parse_magazines_json(&content)?
    } else {
        parse_magazines_toml(&content)?
    };

    tracing::debug!(
        path = %path.display(),
        count = magazines.len(),
        "Loaded magazines"
    );

    Ok(magazines)
}

/// Parse a JSON array of magazines
pub fn parse_magazines_json(content: &str) -> Result<Vec<Magazine>> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a TOML document of `[[magazine]]` tables
pub fn parse_magazines_toml(content: &str) -> Result<Vec<Magazine>> {
    let file: MagazineFile = toml::from_str(content)?;
    Ok(file.magazine)
}
