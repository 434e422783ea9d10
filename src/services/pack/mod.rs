//! Resource pack output: textures, font descriptor and pack manifest.
//!
//! ```text
//! <pack>/pack.mcmeta
//! <pack>/pack.png                                  (only when 1f603 is packed)
//! <pack>/assets/<namespace>/font/default.json
//! <pack>/assets/<namespace>/textures/font/<unicode>.png
//! ```

pub mod assembler;
pub mod builder;
pub mod descriptor;

pub use assembler::PackAssembler;
pub use builder::build_pack;
pub use descriptor::{FontDescriptor, GlyphProvider, PackManifest};

#[cfg(test)]
#[path = "tests/descriptor_tests.rs"]
mod descriptor_tests;

#[cfg(test)]
#[path = "tests/assembler_tests.rs"]
mod assembler_tests;

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod builder_tests;
