//! Pairs an emoji directory with its metadata and style image.

use log::{debug, info};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::metadata::{read_metadata, METADATA_FILE};
use super::walker::EmojiDir;
use crate::services::config::{SkinTone, Style};
use crate::types::report::SkipReason;

const IMAGE_EXTENSION: &str = "png";

/// A catalog entry with everything needed to place it in the pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiEntry {
    pub id: String,
    pub metadata_path: PathBuf,
    pub image_path: PathBuf,
    pub unicode: String,
    pub glyph: String,
    pub cldr: String,
}

/// Locate the image folder for `style`.
///
/// Emoji without skin tones keep it at `<dir>/<style>`, toned emoji at
/// `<dir>/<skin tone>/<style>`. The flat layout wins when both exist.
pub fn find_style_folder(dir: &Path, style: Style, skin_tone: SkinTone) -> Option<PathBuf> {
    let direct = dir.join(style.folder_name());
    if direct.is_dir() {
        debug!("Found {style} folder in {}", dir.display());
        return Some(direct);
    }

    let toned = dir.join(skin_tone.folder_name()).join(style.folder_name());
    if toned.is_dir() {
        debug!("Found {style} folder in {}/{skin_tone}", dir.display());
        return Some(toned);
    }

    None
}

/// First `.png` file (case-insensitive) in `folder`, by file name.
pub fn first_png(folder: &Path) -> Option<PathBuf> {
    WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.into_path())
        .find(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION))
        })
}

/// Resolve metadata and image for one emoji directory.
///
/// Missing pieces are reported in lookup order: style folder, image, then
/// metadata.
pub fn resolve_entry(
    dir: &EmojiDir,
    style: Style,
    skin_tone: SkinTone,
) -> Result<EmojiEntry, SkipReason> {
    let metadata_path = dir.path.join(METADATA_FILE);
    let has_metadata = metadata_path.is_file();
    if has_metadata {
        debug!("Found metadata file: {}", metadata_path.display());
    }

    let image_folder =
        find_style_folder(&dir.path, style, skin_tone).ok_or(SkipReason::MissingStyleFolder)?;
    let image_path = first_png(&image_folder).ok_or(SkipReason::MissingImage)?;
    debug!("Found PNG file: {}", image_path.display());

    if !has_metadata {
        return Err(SkipReason::MissingMetadata);
    }

    let metadata = read_metadata(&metadata_path).map_err(SkipReason::InvalidMetadata)?;
    info!("{}: metadata loaded", metadata.cldr);

    Ok(EmojiEntry {
        id: dir.id.clone(),
        metadata_path,
        image_path,
        unicode: metadata.unicode,
        glyph: metadata.glyph,
        cldr: metadata.cldr,
    })
}
