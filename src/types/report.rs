//! Per-entry outcomes collected while building a pack.
//!
//! Every emoji directory in the catalog ends up as exactly one
//! [`EntryOutcome`]: either accepted into the font, or skipped with a reason.
//! The full list is returned to the caller as a [`PackReport`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Why a catalog entry did not make it into the pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `metadata.json` is absent.
    MissingMetadata,
    /// Neither `<style>` nor `<skin tone>/<style>` exists.
    MissingStyleFolder,
    /// The style folder holds no PNG file.
    MissingImage,
    /// `metadata.json` exists but could not be read or parsed.
    InvalidMetadata(String),
    /// Multi-codepoint sequence that cannot map onto a single font slot.
    UnsupportedCodepoint(String),
    /// Codepoint string is not a valid hexadecimal Unicode scalar value.
    InvalidCodepoint(String),
    /// `fe0f` precedes the base codepoint instead of following it.
    SelectorNotTrailing(String),
    /// The texture could not be copied into the pack.
    CopyFailed(String),
}

impl SkipReason {
    /// Stable short label, used for grouping in the run summary.
    pub fn kind(&self) -> &'static str {
        match self {
            SkipReason::MissingMetadata => "missing_metadata",
            SkipReason::MissingStyleFolder => "missing_style_folder",
            SkipReason::MissingImage => "missing_image",
            SkipReason::InvalidMetadata(_) => "invalid_metadata",
            SkipReason::UnsupportedCodepoint(_) => "unsupported_codepoint",
            SkipReason::InvalidCodepoint(_) => "invalid_codepoint",
            SkipReason::SelectorNotTrailing(_) => "selector_not_trailing",
            SkipReason::CopyFailed(_) => "copy_failed",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingMetadata => write!(f, "no metadata.json"),
            SkipReason::MissingStyleFolder => write!(f, "no folder for the requested style"),
            SkipReason::MissingImage => write!(f, "no PNG image in style folder"),
            SkipReason::InvalidMetadata(msg) => write!(f, "invalid metadata: {msg}"),
            SkipReason::UnsupportedCodepoint(unicode) => {
                write!(f, "'{unicode}' is a multi-codepoint sequence")
            }
            SkipReason::InvalidCodepoint(unicode) => {
                write!(f, "'{unicode}' is not a valid codepoint")
            }
            SkipReason::SelectorNotTrailing(unicode) => write!(
                f,
                "'{unicode}' has the fe0f selector before its base codepoint; only a trailing selector can be dropped"
            ),
            SkipReason::CopyFailed(msg) => write!(f, "texture copy failed: {msg}"),
        }
    }
}

/// An emoji that was copied into the pack and received a glyph provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedEntry {
    /// Source directory name in the catalog.
    pub id: String,
    /// Codepoint string used as the texture file stem.
    pub unicode: String,
    /// Character the provider maps onto the texture.
    pub glyph: String,
    /// Image the texture was copied from.
    pub source_image: PathBuf,
    /// `<unicode>.png`
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Accepted(AcceptedEntry),
    Skipped { id: String, reason: SkipReason },
}

impl EntryOutcome {
    pub fn id(&self) -> &str {
        match self {
            EntryOutcome::Accepted(entry) => &entry.id,
            EntryOutcome::Skipped { id, .. } => id,
        }
    }
}

/// Result of a full pack build.
#[derive(Debug, Clone)]
pub struct PackReport {
    pub pack_root: PathBuf,
    /// One outcome per catalog directory, in traversal order.
    pub outcomes: Vec<EntryOutcome>,
    /// Whether `pack.png` was produced.
    pub icon_written: bool,
}

impl PackReport {
    pub fn accepted(&self) -> impl Iterator<Item = &AcceptedEntry> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            EntryOutcome::Accepted(entry) => Some(entry),
            EntryOutcome::Skipped { .. } => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            EntryOutcome::Skipped { id, reason } => Some((id.as_str(), reason)),
            EntryOutcome::Accepted(_) => None,
        })
    }

    /// Number of skipped entries per [`SkipReason::kind`].
    pub fn skip_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for (_, reason) in self.skipped() {
            *counts.entry(reason.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// One-line summary, e.g. `"12 emoji packed, 3 skipped (missing_image: 2, ...)"`.
    pub fn summary(&self) -> String {
        let accepted = self.accepted().count();
        let skipped = self.outcomes.len() - accepted;
        if skipped == 0 {
            return format!("{accepted} emoji packed, 0 skipped");
        }

        let breakdown: Vec<String> = self
            .skip_counts()
            .iter()
            .map(|(kind, count)| format!("{kind}: {count}"))
            .collect();
        format!(
            "{accepted} emoji packed, {skipped} skipped ({})",
            breakdown.join(", ")
        )
    }
}
