use std::io::{Cursor, Write};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Build an in-memory ZIP shaped like a GitHub branch snapshot.
pub fn snapshot_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for (name, content) in entries {
        writer
            .start_file(name.to_string(), options)
            .expect("zip entry should start");
        writer.write_all(content).expect("zip entry should be written");
    }
    writer
        .finish()
        .expect("zip should be finalized")
        .into_inner()
}
