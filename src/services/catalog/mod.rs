//! Reading the extracted emoji catalog.
//!
//! The upstream layout is one directory per emoji:
//!
//! ```text
//! <root>/Grinning face/metadata.json
//! <root>/Grinning face/3D/grinning_face_3d.png
//! <root>/Thumbs up/Default/3D/thumbs_up_3d_default.png
//! ```
//!
//! `walker` lists the emoji directories, `resolver` pairs each one with its
//! metadata and style image, and `codepoint` decides the texture name and the
//! character the font maps onto it.

pub mod codepoint;
pub mod metadata;
pub mod resolver;
pub mod walker;

pub use codepoint::{transform_codepoint, GlyphTarget};
pub use metadata::{read_metadata, EmojiMetadata, METADATA_FILE};
pub use resolver::{resolve_entry, EmojiEntry};
pub use walker::{list_emoji_dirs, EmojiDir};

#[cfg(test)]
#[path = "tests/codepoint_tests.rs"]
mod codepoint_tests;

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod resolver_tests;

#[cfg(test)]
#[path = "tests/walker_tests.rs"]
mod walker_tests;
