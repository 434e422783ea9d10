use super::*;
use clap::Parser;
use crate::services::config::{PackConfig, SkinTone, Style};
use std::path::PathBuf;

#[test]
fn test_defaults_match_pack_config_default() {
    let args = Args::try_parse_from(["emojipack"]).unwrap();
    assert!(!args.verbose);
    assert_eq!(args.into_config(), PackConfig::default());
}

#[test]
fn test_all_flags() {
    let args = Args::try_parse_from([
        "emojipack",
        "--github-url",
        "http://mirror.local",
        "--repo-url",
        "someone/emoji-fork",
        "--branch",
        "dev",
        "--folder-name",
        "emoji-fork-dev/assets",
        "--extract-to",
        "/tmp/emoji",
        "--skin-tone",
        "Medium-Dark",
        "--style",
        "Flat",
        "--download",
        "--packs-dir",
        "out",
        "--namespace",
        "emoji",
        "-v",
    ])
    .unwrap();
    assert!(args.verbose);

    let config = args.into_config();
    assert_eq!(config.github_url, "http://mirror.local");
    assert_eq!(config.repo_url, "someone/emoji-fork");
    assert_eq!(config.branch, "dev");
    assert_eq!(config.folder_name, "emoji-fork-dev/assets");
    assert_eq!(config.extract_to, PathBuf::from("/tmp/emoji"));
    assert_eq!(config.skin_tone, SkinTone::MediumDark);
    assert_eq!(config.style, Style::Flat);
    assert!(config.download);
    assert_eq!(config.packs_dir, PathBuf::from("out"));
    assert_eq!(config.namespace, "emoji");
}

#[test]
fn test_enum_flags_ignore_case() {
    let args = Args::try_parse_from(["emojipack", "--style", "3d", "--skin-tone", "light"]).unwrap();
    assert_eq!(args.style, Style::ThreeD);
    assert_eq!(args.skin_tone, SkinTone::Light);
}

#[test]
fn test_rejects_unknown_skin_tone() {
    let result = Args::try_parse_from(["emojipack", "--skin-tone", "Purple"]);
    assert!(result.is_err());
}
