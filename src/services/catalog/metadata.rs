use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const METADATA_FILE: &str = "metadata.json";

/// The subset of an upstream `metadata.json` the pack needs.
///
/// Other fields (`tts`, `keywords`, `unicodeSkintones`, ...) are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EmojiMetadata {
    /// Space-separated lowercase hex codepoints, e.g. `"1f600"` or `"2764 fe0f"`.
    pub unicode: String,
    pub glyph: String,
    /// CLDR short name, only used for log output.
    #[serde(default)]
    pub cldr: String,
}

/// Read and parse a `metadata.json` file.
pub fn read_metadata(path: &Path) -> Result<EmojiMetadata, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;

    serde_json::from_str(&content).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}
