//! Extraction of one subtree of a downloaded repository archive.

mod extract;

pub use extract::{extract_folder, relative_entry_path, ExtractionResult};

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
