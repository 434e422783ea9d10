use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::services::fs_utils::file_utils::atomic_write;
use crate::types::errors::{PackError, PackResult};

/// Glyph height in font pixels.
pub const GLYPH_HEIGHT: i32 = 7;
/// Glyph ascent; equal to the height so emoji sit on the baseline.
pub const GLYPH_ASCENT: i32 = 7;
/// Resource pack format version written to `pack.mcmeta`.
pub const PACK_FORMAT: u32 = 15;

/// One entry of the font's `providers` list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GlyphProvider {
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource location of the texture, e.g. `minecraft:font/1f600.png`.
    pub file: String,
    pub height: i32,
    pub ascent: i32,
    /// Always exactly one character string.
    pub chars: Vec<String>,
}

impl GlyphProvider {
    pub fn bitmap(file: String, glyph: String) -> Self {
        Self {
            kind: "bitmap".into(),
            file,
            height: GLYPH_HEIGHT,
            ascent: GLYPH_ASCENT,
            chars: vec![glyph],
        }
    }
}

/// `assets/<namespace>/font/default.json`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct FontDescriptor {
    pub providers: Vec<GlyphProvider>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PackMeta {
    pub description: String,
    pub pack_format: u32,
}

/// `pack.mcmeta`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PackManifest {
    pub pack: PackMeta,
}

impl PackManifest {
    pub fn new(description: String) -> Self {
        Self {
            pack: PackMeta {
                description,
                pack_format: PACK_FORMAT,
            },
        }
    }
}

/// Pretty JSON with 4-space indentation. Non-ASCII text is written as-is.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}

/// Serialize `value` and write it atomically to `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> PackResult<()> {
    let json = to_pretty_json(value).map_err(|source| PackError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_write(path, &json).map_err(|e| PackError::io(path, e))
}
