//! The `emojipack` run: optional download, then pack build.

use anyhow::Context;
use log::info;

use crate::services::archive::{extract_folder, ExtractionResult};
use crate::services::config::PackConfig;
use crate::services::fetch::{fetch_repo_archive, ConsoleProgress};
use crate::services::pack::build_pack;
use crate::types::report::PackReport;

/// Download the repository snapshot and extract the asset folder into the cache.
pub fn download_catalog(config: &PackConfig) -> anyhow::Result<ExtractionResult> {
    info!("Downloading repository {}", config.repo_url);
    let mut progress = ConsoleProgress::default();
    let archive = fetch_repo_archive(
        &config.github_url,
        &config.repo_url,
        &config.branch,
        &mut progress,
    )
        .with_context(|| format!("Failed to download repository {}", config.repo_url))?;

    info!(
        "Extracting folder {} to {}",
        config.folder_name,
        config.extract_to.display()
    );
    let result = extract_folder(&archive.bytes, &config.folder_name, &config.extract_to)
        .with_context(|| format!("Failed to extract folder {}", config.folder_name))?;

    info!(
        "Folder {} extracted successfully to {} ({} files)",
        config.folder_name,
        config.extract_to.display(),
        result.files_extracted
    );
    Ok(result)
}

/// Run the whole pipeline for `config`.
///
/// A failed download is fatal when one was requested. Without `download` the
/// previously extracted cache is used as-is.
pub fn run(config: &PackConfig) -> anyhow::Result<PackReport> {
    if config.download {
        download_catalog(config)?;
    } else {
        info!(
            "Skipping download, using cached assets in {}",
            config.extract_to.display()
        );
    }

    let report = build_pack(config)
        .with_context(|| format!("Failed to build pack {}", config.pack_name()))?;

    info!("{}", report.summary());
    info!("Pack written to {}", report.pack_root.display());
    Ok(report)
}
