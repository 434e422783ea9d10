//! Command-line flags. Every flag can also come from an `EMOJIPACK_*` variable.

use clap::Parser;
use std::path::PathBuf;

use crate::services::config::{
    PackConfig, SkinTone, Style, DEFAULT_BRANCH, DEFAULT_EXTRACT_TO, DEFAULT_FOLDER_NAME,
    DEFAULT_GITHUB_URL, DEFAULT_NAMESPACE, DEFAULT_PACKS_DIR, DEFAULT_REPO_URL,
};

/// Build a custom-font resource pack from the Fluent UI emoji set.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the GitHub host (or a mirror with the same archive layout)
    #[arg(long, env = "EMOJIPACK_GITHUB_URL", default_value = DEFAULT_GITHUB_URL)]
    pub github_url: String,

    /// GitHub repository to download, as `owner/repo`
    #[arg(long, env = "EMOJIPACK_REPO_URL", default_value = DEFAULT_REPO_URL)]
    pub repo_url: String,

    /// Branch whose snapshot archive is downloaded
    #[arg(long, env = "EMOJIPACK_BRANCH", default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Folder inside the archive that holds the emoji assets
    #[arg(long, env = "EMOJIPACK_FOLDER_NAME", default_value = DEFAULT_FOLDER_NAME)]
    pub folder_name: String,

    /// Local cache directory for the extracted assets
    #[arg(long, env = "EMOJIPACK_EXTRACT_TO", default_value = DEFAULT_EXTRACT_TO)]
    pub extract_to: PathBuf,

    #[arg(long, env = "EMOJIPACK_SKIN_TONE", value_enum, ignore_case = true, default_value_t = SkinTone::Default)]
    pub skin_tone: SkinTone,

    #[arg(long, env = "EMOJIPACK_STYLE", value_enum, ignore_case = true, default_value_t = Style::ThreeD)]
    pub style: Style,

    /// Download and extract the assets before building (otherwise reuse the cache)
    #[arg(long, env = "EMOJIPACK_DOWNLOAD")]
    pub download: bool,

    /// Directory the pack folder is created in
    #[arg(long, env = "EMOJIPACK_PACKS_DIR", default_value = DEFAULT_PACKS_DIR)]
    pub packs_dir: PathBuf,

    /// Resource namespace for the font and textures
    #[arg(long, env = "EMOJIPACK_NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_config(self) -> PackConfig {
        PackConfig {
            github_url: self.github_url,
            repo_url: self.repo_url,
            branch: self.branch,
            folder_name: self.folder_name,
            extract_to: self.extract_to,
            skin_tone: self.skin_tone,
            style: self.style,
            download: self.download,
            packs_dir: self.packs_dir,
            namespace: self.namespace,
        }
    }
}

/// Install the stdout logger. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;
