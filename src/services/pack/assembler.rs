use log::{debug, warn};
use std::collections::HashSet;
use std::path::PathBuf;

use super::descriptor::{write_json, FontDescriptor, GlyphProvider, PackManifest};
use crate::services::catalog::{EmojiEntry, GlyphTarget};
use crate::services::config::PackConfig;
use crate::services::fs_utils::file_utils::copy_file;
use crate::types::errors::PackResult;
use crate::types::report::{AcceptedEntry, SkipReason};

/// Codepoint whose artwork doubles as the pack icon (U+1F603, grinning face
/// with big eyes).
pub const ICON_CODEPOINT: &str = "1f603";

/// What [`PackAssembler::finish`] wrote.
#[derive(Debug, Clone)]
pub struct AssembledPack {
    pub font: FontDescriptor,
    pub manifest: PackManifest,
    pub icon_written: bool,
}

/// Copies textures into the pack and collects their glyph providers.
///
/// Entries are added in traversal order; the descriptor files are only
/// written by [`finish`](Self::finish).
pub struct PackAssembler<'a> {
    config: &'a PackConfig,
    textures_dir: PathBuf,
    providers: Vec<GlyphProvider>,
    seen_files: HashSet<String>,
    icon_written: bool,
}

impl<'a> PackAssembler<'a> {
    pub fn new(config: &'a PackConfig) -> Self {
        Self {
            config,
            textures_dir: config.textures_dir(),
            providers: Vec::new(),
            seen_files: HashSet::new(),
            icon_written: false,
        }
    }

    pub fn providers(&self) -> &[GlyphProvider] {
        &self.providers
    }

    /// Copy the entry's image to `textures/font/<unicode>.png` and register a provider.
    ///
    /// A failed texture copy skips the entry without registering anything. A
    /// failed icon copy is only logged.
    pub fn add(
        &mut self,
        entry: &EmojiEntry,
        target: GlyphTarget,
    ) -> Result<AcceptedEntry, SkipReason> {
        let file_name = target.file_name();
        let destination = self.textures_dir.join(&file_name);

        debug!(
            "Copying {} to {}",
            entry.image_path.display(),
            destination.display()
        );
        if let Err(e) = copy_file(&entry.image_path, &destination) {
            warn!(
                "Failed to copy texture for '{}' to {}: {e}",
                entry.id,
                destination.display()
            );
            return Err(SkipReason::CopyFailed(format!(
                "{}: {e}",
                destination.display()
            )));
        }

        if !self.seen_files.insert(file_name.clone()) {
            warn!(
                "Duplicate codepoint {} from '{}': texture overwritten",
                target.unicode, entry.id
            );
        }

        self.providers.push(GlyphProvider::bitmap(
            self.config.texture_resource(&file_name),
            target.glyph.clone(),
        ));

        if target.unicode == ICON_CODEPOINT {
            let icon_path = self.config.icon_path();
            match copy_file(&entry.image_path, &icon_path) {
                Ok(_) => {
                    debug!("Pack icon written from '{}'", entry.id);
                    self.icon_written = true;
                }
                Err(e) => warn!("Failed to write pack icon {}: {e}", icon_path.display()),
            }
        }

        Ok(AcceptedEntry {
            id: entry.id.clone(),
            unicode: target.unicode,
            glyph: target.glyph,
            source_image: entry.image_path.clone(),
            file_name,
        })
    }

    /// Write `default.json` and `pack.mcmeta`.
    pub fn finish(self) -> PackResult<AssembledPack> {
        let font = FontDescriptor {
            providers: self.providers,
        };
        write_json(&self.config.font_descriptor_path(), &font)?;

        let manifest = PackManifest::new(self.config.pack_description());
        write_json(&self.config.manifest_path(), &manifest)?;

        Ok(AssembledPack {
            font,
            manifest,
            icon_written: self.icon_written,
        })
    }
}
