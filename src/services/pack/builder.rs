use log::info;

use super::assembler::PackAssembler;
use crate::services::catalog::{
    list_emoji_dirs, resolve_entry, transform_codepoint, EmojiDir, EmojiEntry, GlyphTarget,
};
use crate::services::config::PackConfig;
use crate::types::errors::PackResult;
use crate::types::report::{EntryOutcome, PackReport, SkipReason};

/// Build the resource pack from the extracted catalog at `config.extract_to`.
///
/// Entries that cannot be packed, including those whose texture cannot be
/// copied, are skipped and recorded in the report. Only a missing catalog or
/// a failed descriptor write aborts the build.
pub fn build_pack(config: &PackConfig) -> PackResult<PackReport> {
    let dirs = list_emoji_dirs(&config.extract_to)?;
    info!(
        "Building {} from {} emoji folders in {}",
        config.pack_name(),
        dirs.len(),
        config.extract_to.display()
    );

    let mut assembler = PackAssembler::new(config);
    let mut outcomes = Vec::with_capacity(dirs.len());

    for dir in &dirs {
        let outcome = match prepare_entry(dir, config)
            .and_then(|(entry, target)| assembler.add(&entry, target))
        {
            Ok(accepted) => EntryOutcome::Accepted(accepted),
            Err(reason) => {
                info!("Skipping '{}': {reason}", dir.id);
                EntryOutcome::Skipped {
                    id: dir.id.clone(),
                    reason,
                }
            }
        };
        outcomes.push(outcome);
    }

    let assembled = assembler.finish()?;
    info!(
        "Wrote {} glyph providers to {}",
        assembled.font.providers.len(),
        config.font_descriptor_path().display()
    );

    Ok(PackReport {
        pack_root: config.pack_root(),
        outcomes,
        icon_written: assembled.icon_written,
    })
}

fn prepare_entry(
    dir: &EmojiDir,
    config: &PackConfig,
) -> Result<(EmojiEntry, GlyphTarget), SkipReason> {
    let entry = resolve_entry(dir, config.style, config.skin_tone)?;
    let target = transform_codepoint(&entry.unicode, &entry.glyph)?;
    Ok((entry, target))
}
