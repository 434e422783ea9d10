//! Codepoint rules: which metadata values can occupy a single font slot.
//!
//! A bitmap provider maps exactly one character onto one texture, so only
//! single-codepoint emoji are usable. The one exception is a base codepoint
//! followed by the emoji variation selector `fe0f`, which is dropped.

use crate::types::report::SkipReason;

/// Emoji presentation selector (U+FE0F).
pub const VARIATION_SELECTOR: &str = "fe0f";

/// Texture name and display character for an accepted emoji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTarget {
    /// File stem of the texture, e.g. `"1f600"`.
    pub unicode: String,
    pub glyph: String,
}

impl GlyphTarget {
    pub fn file_name(&self) -> String {
        format!("{}.png", self.unicode)
    }
}

/// Parse a hexadecimal codepoint into a `char`.
///
/// Returns `None` for non-hex input, surrogates, and values above U+10FFFF.
pub fn char_from_hex(hex: &str) -> Option<char> {
    let value = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(value)
}

/// Apply the codepoint rules to a metadata `unicode`/`glyph` pair.
///
/// | `unicode`                               | result                               |
/// |-----------------------------------------|--------------------------------------|
/// | no space, hex digits only               | used as-is with the metadata glyph   |
/// | no space, anything else                 | `InvalidCodepoint`                   |
/// | one space, starts with `fe0f`           | `SelectorNotTrailing`                |
/// | one space, contains `fe0f` anywhere     | `" fe0f"` removed once, glyph rebuilt |
/// | anything else                           | `UnsupportedCodepoint`               |
///
/// The stem becomes a texture file name, so it never contains path
/// separators or `..`.
pub fn transform_codepoint(unicode: &str, glyph: &str) -> Result<GlyphTarget, SkipReason> {
    if !unicode.contains(' ') {
        if !is_hex_stem(unicode) {
            return Err(SkipReason::InvalidCodepoint(unicode.to_string()));
        }
        return Ok(GlyphTarget {
            unicode: unicode.to_string(),
            glyph: glyph.to_string(),
        });
    }

    let spaces = unicode.matches(' ').count();
    if spaces == 1 && unicode.contains(VARIATION_SELECTOR) {
        if unicode.starts_with("fe0f ") {
            return Err(SkipReason::SelectorNotTrailing(unicode.to_string()));
        }
        let base = unicode.replacen(" fe0f", "", 1);
        let ch = char_from_hex(&base)
            .ok_or_else(|| SkipReason::InvalidCodepoint(unicode.to_string()))?;
        return Ok(GlyphTarget {
            unicode: base,
            glyph: ch.to_string(),
        });
    }

    Err(SkipReason::UnsupportedCodepoint(unicode.to_string()))
}

fn is_hex_stem(stem: &str) -> bool {
    !stem.is_empty() && stem.chars().all(|c| c.is_ascii_hexdigit())
}
