//! Emoji directory listing.
//! Uses `walkdir` with name sorting so every run sees the same order.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::types::errors::{PackError, PackResult};

/// One top-level emoji directory of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiDir {
    /// Directory name, e.g. `"Grinning face"`.
    pub id: String,
    pub path: PathBuf,
}

/// List the immediate child directories of the catalog root, sorted by name.
///
/// Plain files at the root are ignored. Unreadable entries are logged and skipped.
pub fn list_emoji_dirs(root: &Path) -> PackResult<Vec<EmojiDir>> {
    if !root.is_dir() {
        return Err(PackError::CatalogMissing(root.to_path_buf()));
    }

    let mut dirs = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        dirs.push(EmojiDir {
            id: entry.file_name().to_string_lossy().to_string(),
            path: path.to_path_buf(),
        });
    }

    Ok(dirs)
}
