use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_GITHUB_URL: &str = "https://github.com";
pub const DEFAULT_REPO_URL: &str = "microsoft/fluentui-emoji";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_FOLDER_NAME: &str = "fluentui-emoji-main/assets";
pub const DEFAULT_EXTRACT_TO: &str = "./cache/fluentui-emoji/assets/";
pub const DEFAULT_PACKS_DIR: &str = "./packs";
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Skin tone variant. Only consulted for emoji that ship per-tone folders.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SkinTone {
    #[default]
    #[value(name = "Default")]
    Default,
    #[value(name = "Dark")]
    Dark,
    #[serde(rename = "Medium-Dark")]
    #[value(name = "Medium-Dark")]
    MediumDark,
    #[serde(rename = "Medium-Light")]
    #[value(name = "Medium-Light")]
    MediumLight,
    #[value(name = "Light")]
    Light,
}

impl SkinTone {
    /// Folder name used by the upstream asset layout.
    pub fn folder_name(&self) -> &'static str {
        match self {
            SkinTone::Default => "Default",
            SkinTone::Dark => "Dark",
            SkinTone::MediumDark => "Medium-Dark",
            SkinTone::MediumLight => "Medium-Light",
            SkinTone::Light => "Light",
        }
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder_name())
    }
}

/// Rendering style of the source artwork.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Style {
    #[default]
    #[serde(rename = "3D")]
    #[value(name = "3D")]
    ThreeD,
    #[value(name = "Color")]
    Color,
    #[value(name = "Flat")]
    Flat,
}

impl Style {
    pub fn folder_name(&self) -> &'static str {
        match self {
            Style::ThreeD => "3D",
            Style::Color => "Color",
            Style::Flat => "Flat",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder_name())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PackConfig {
    /// Host serving the repository archives.
    pub github_url: String,
    /// `owner/repo` on GitHub.
    pub repo_url: String,
    pub branch: String,
    /// Archive path prefix to extract, e.g. `fluentui-emoji-main/assets`.
    pub folder_name: String,
    /// Local cache directory holding the extracted catalog.
    pub extract_to: PathBuf,
    pub skin_tone: SkinTone,
    pub style: Style,
    /// Fetch and extract before building. Otherwise the cache is reused.
    pub download: bool,
    pub packs_dir: PathBuf,
    /// Resource namespace the font and textures are registered under.
    pub namespace: String,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            github_url: DEFAULT_GITHUB_URL.into(),
            repo_url: DEFAULT_REPO_URL.into(),
            branch: DEFAULT_BRANCH.into(),
            folder_name: DEFAULT_FOLDER_NAME.into(),
            extract_to: PathBuf::from(DEFAULT_EXTRACT_TO),
            skin_tone: SkinTone::default(),
            style: Style::default(),
            download: false,
            packs_dir: PathBuf::from(DEFAULT_PACKS_DIR),
            namespace: DEFAULT_NAMESPACE.into(),
        }
    }
}

impl PackConfig {
    /// Directory name of the generated pack, e.g. `FluentUi-3D-Default-Emoji`.
    pub fn pack_name(&self) -> String {
        format!("FluentUi-{}-{}-Emoji", self.style, self.skin_tone)
    }

    pub fn pack_description(&self) -> String {
        format!(
            "FluentUi {}-{} Emoji Resource Pack",
            self.style, self.skin_tone
        )
    }

    pub fn pack_root(&self) -> PathBuf {
        self.packs_dir.join(self.pack_name())
    }

    /// `<pack>/assets/<namespace>/textures/font`
    pub fn textures_dir(&self) -> PathBuf {
        self.pack_root()
            .join("assets")
            .join(&self.namespace)
            .join("textures")
            .join("font")
    }

    /// `<pack>/assets/<namespace>/font/default.json`
    pub fn font_descriptor_path(&self) -> PathBuf {
        self.pack_root()
            .join("assets")
            .join(&self.namespace)
            .join("font")
            .join("default.json")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.pack_root().join("pack.mcmeta")
    }

    pub fn icon_path(&self) -> PathBuf {
        self.pack_root().join("pack.png")
    }

    /// Resource location for a texture, e.g. `minecraft:font/1f600.png`.
    pub fn texture_resource(&self, file_name: &str) -> String {
        format!("{}:font/{}", self.namespace, file_name)
    }
}
