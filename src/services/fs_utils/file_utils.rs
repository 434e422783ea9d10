use std::fs;
use std::io;
use std::path::Path;

/// Write a file atomically: write to `.tmp`, then rename to final path.
/// Creates missing parent directories. Readers never see a partial file.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, content)?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        log::warn!(
            "Failed to rename {} -> {}: {e}",
            tmp_path.display(),
            path.display()
        );
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}

/// Copy `from` to `to`, creating parent directories and overwriting `to`.
pub fn copy_file(from: &Path, to: &Path) -> io::Result<u64> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(from, to)
}
