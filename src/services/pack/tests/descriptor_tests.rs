use super::descriptor::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_bitmap_provider_constants() {
    let provider = GlyphProvider::bitmap("minecraft:font/1f600.png".into(), "😀".into());

    assert_eq!(provider.kind, "bitmap");
    assert_eq!(provider.height, 7);
    assert_eq!(provider.ascent, 7);
    assert_eq!(provider.chars, vec!["😀".to_string()]);
}

#[test]
fn test_provider_json_shape() {
    let provider = GlyphProvider::bitmap("minecraft:font/1f600.png".into(), "😀".into());
    let json = serde_json::to_string(&provider).unwrap();

    assert_eq!(
        json,
        r#"{"type":"bitmap","file":"minecraft:font/1f600.png","height":7,"ascent":7,"chars":["😀"]}"#
    );
}

#[test]
fn test_pretty_json_uses_four_spaces_and_literal_unicode() {
    let font = FontDescriptor {
        providers: vec![GlyphProvider::bitmap(
            "minecraft:font/1f600.png".into(),
            "😀".into(),
        )],
    };

    let json = String::from_utf8(to_pretty_json(&font).unwrap()).unwrap();

    let expected = r#"{
    "providers": [
        {
            "type": "bitmap",
            "file": "minecraft:font/1f600.png",
            "height": 7,
            "ascent": 7,
            "chars": [
                "😀"
            ]
        }
    ]
}"#;
    assert_eq!(json, expected);
    assert!(!json.contains("\\u"));
}

#[test]
fn test_manifest_json() {
    let manifest = PackManifest::new("FluentUi 3D-Default Emoji Resource Pack".into());
    let json = String::from_utf8(to_pretty_json(&manifest).unwrap()).unwrap();

    let expected = r#"{
    "pack": {
        "description": "FluentUi 3D-Default Emoji Resource Pack",
        "pack_format": 15
    }
}"#;
    assert_eq!(json, expected);
}

#[test]
fn test_write_json_creates_parents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("assets/minecraft/font/default.json");

    write_json(&path, &FontDescriptor::default()).unwrap();

    let parsed: FontDescriptor =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(parsed.providers.is_empty());
}
