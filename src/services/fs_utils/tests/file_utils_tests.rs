use super::file_utils::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_atomic_write_creates_parents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("assets/minecraft/font/default.json");

    atomic_write(&path, b"{}").unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"{}");
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn test_atomic_write_replaces_existing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pack.mcmeta");
    fs::write(&path, "old content, longer than the new one").unwrap();

    atomic_write(&path, b"new").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn test_copy_file_overwrites_and_creates_parents() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src.png");
    let dst = dir.path().join("textures/font/1f600.png");
    fs::write(&src, b"first").unwrap();

    copy_file(&src, &dst).unwrap();
    fs::write(&src, b"second").unwrap();
    copy_file(&src, &dst).unwrap();

    assert_eq!(fs::read(&dst).unwrap(), b"second");
}

#[test]
fn test_copy_file_missing_source() {
    let dir = TempDir::new().unwrap();
    let result = copy_file(&dir.path().join("missing.png"), &dir.path().join("out.png"));
    assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::NotFound);
}
