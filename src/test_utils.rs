use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// `metadata.json` body in the upstream format.
pub fn metadata_json(unicode: &str, glyph: &str, cldr: &str) -> String {
    serde_json::json!({
        "cldr": cldr,
        "fromVersion": "1.0",
        "glyph": glyph,
        "keywords": [cldr],
        "tts": cldr,
        "unicode": unicode,
    })
    .to_string()
}

/// Create `<root>/<id>/` with an optional `metadata.json` and the given image
/// files (paths relative to the emoji directory, e.g. `"3D/face_3d.png"`).
pub fn write_emoji(root: &Path, id: &str, metadata: Option<&str>, images: &[&str]) -> PathBuf {
    let dir = root.join(id);
    fs::create_dir_all(&dir).unwrap();

    if let Some(metadata) = metadata {
        fs::write(dir.join("metadata.json"), metadata).unwrap();
    }
    for image in images {
        let path = dir.join(image);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("image:{id}/{image}")).unwrap();
    }
    dir
}
