use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Cursor};
use std::path::{Component, Path, PathBuf};

use crate::types::errors::ExtractError;

/// Result of an extraction operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub files_extracted: usize,
    /// Prefix matches that were not extracted (sibling folders, `..`, absolute paths).
    pub rejected_entries: usize,
}

/// Map an archive entry name to its path relative to `folder_name`.
///
/// Returns `None` when the entry lies outside the folder, is the folder
/// itself, or would resolve outside the destination (`..`, absolute paths).
pub fn relative_entry_path(entry_name: &str, folder_name: &str) -> Option<PathBuf> {
    let rest = entry_name.strip_prefix(folder_name)?;

    // `assets2/x` must not match the prefix `assets`
    if !folder_name.ends_with('/') && !rest.is_empty() && !rest.starts_with('/') {
        return None;
    }

    let rest = rest.trim_start_matches('/');
    if rest.is_empty() {
        return None;
    }

    let mut relative = PathBuf::new();
    for component in Path::new(rest).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}

/// Extract every file under `folder_name` in a zip archive into `dest_dir`.
///
/// Steps:
/// 1. Select entries whose name starts with `folder_name`
/// 2. Strip the prefix and recreate the remaining structure under `dest_dir`
/// 3. Write file contents, overwriting existing files; skip directory entries
pub fn extract_folder(
    archive_bytes: &[u8],
    folder_name: &str,
    dest_dir: &Path,
) -> Result<ExtractionResult, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(archive_bytes))?;

    let mut selected: Vec<(usize, PathBuf)> = Vec::new();
    let mut rejected_entries = 0;
    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        let name = entry.name();
        if !name.starts_with(folder_name) || entry.is_dir() {
            continue;
        }
        match relative_entry_path(name, folder_name) {
            Some(relative) => selected.push((i, relative)),
            None => {
                log::warn!("Skipping archive entry outside extraction folder: {name}");
                rejected_entries += 1;
            }
        }
    }

    log::info!(
        "Extracting {} files from '{}' to {}",
        selected.len(),
        folder_name,
        dest_dir.display()
    );

    let bar = ProgressBar::new(selected.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("Extracting [{bar:40}] {pos}/{len}") {
        bar.set_style(style.progress_chars("=> "));
    }

    let mut files_extracted = 0;
    for (index, relative) in selected {
        let mut entry = archive.by_index(index)?;
        let output_path = dest_dir.join(&relative);

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|source| ExtractError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let mut outfile = fs::File::create(&output_path).map_err(|source| ExtractError::Io {
            path: output_path.clone(),
            source,
        })?;
        io::copy(&mut entry, &mut outfile).map_err(|source| ExtractError::Io {
            path: output_path.clone(),
            source,
        })?;

        files_extracted += 1;
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(ExtractionResult {
        files_extracted,
        rejected_entries,
    })
}
