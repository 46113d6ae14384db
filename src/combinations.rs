//! Spacing strings built from a set of letters.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::GlyphToolsError;

/// The bits of a glyph needed to turn it back into a letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphInfo {
    pub name: SmolStr,
    /// Hexadecimal Unicode value, e.g. `"0041"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unicode: Option<String>,
}

impl GlyphInfo {
    pub fn new(name: impl Into<SmolStr>, unicode: Option<&str>) -> Self {
        GlyphInfo {
            name: name.into(),
            unicode: unicode.map(|u| u.to_string()),
        }
    }
}

/// Decode the selected glyphs' Unicode values, skipping unencoded glyphs.
pub fn letters_from_glyphs(glyphs: &[GlyphInfo]) -> Result<Vec<char>, GlyphToolsError> {
    let mut letters = vec![];
    for glyph in glyphs {
        let Some(unicode) = &glyph.unicode else {
            log::info!("Glyph {} has no Unicode value and will be skipped", glyph.name);
            continue;
        };
        let letter = u32::from_str_radix(unicode.trim_start_matches("U+"), 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| GlyphToolsError::BadCodepoint {
                glyph: glyph.name.to_string(),
                value: unicode.clone(),
            })?;
        log::debug!("Glyph: {}, Unicode: {}, Character: {}", glyph.name, unicode, letter);
        letters.push(letter);
    }
    Ok(letters)
}

/// Every ordered pair of letters, doubles included, run together
pub fn all_letter_combinations(letters: &[char]) -> Result<String, GlyphToolsError> {
    if letters.is_empty() {
        return Err(GlyphToolsError::NoLettersSelected);
    }
    let mut out = String::with_capacity(letters.len() * letters.len() * 2);
    for first in letters {
        for second in letters {
            out.push(*first);
            out.push(*second);
        }
    }
    Ok(out)
}

/// Each uppercase letter followed by each lowercase letter, run together
pub fn upper_lower_combinations(letters: &[char]) -> Result<String, GlyphToolsError> {
    if letters.is_empty() {
        return Err(GlyphToolsError::NoLettersSelected);
    }
    let (upper, lower): (Vec<char>, Vec<char>) = letters
        .iter()
        .filter(|c| c.is_uppercase() || c.is_lowercase())
        .partition(|c| c.is_uppercase());
    Ok(upper
        .iter()
        .flat_map(|u| lower.iter().flat_map(move |l| [*u, *l]))
        .collect())
}
