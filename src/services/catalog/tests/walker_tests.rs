use super::walker::*;
use crate::types::errors::PackError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_lists_directories_sorted_by_name() {
    let dir = TempDir::new().unwrap();
    for name in ["Zany face", "Alien", "Grinning face"] {
        fs::create_dir(dir.path().join(name)).unwrap();
    }
    fs::write(dir.path().join("README.md"), "not an emoji").unwrap();

    let dirs = list_emoji_dirs(dir.path()).unwrap();

    let ids: Vec<&str> = dirs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["Alien", "Grinning face", "Zany face"]);
    assert_eq!(dirs[0].path, dir.path().join("Alien"));
}

#[test]
fn test_does_not_descend_into_emoji_directories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("Alien").join("3D")).unwrap();

    let dirs = list_emoji_dirs(dir.path()).unwrap();
    assert_eq!(dirs.len(), 1);
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("cache");

    match list_emoji_dirs(&missing) {
        Err(PackError::CatalogMissing(path)) => assert_eq!(path, missing),
        other => panic!("Expected CatalogMissing, got {other:?}"),
    }
}
