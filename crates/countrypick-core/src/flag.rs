// crates/countrypick-core/src/flag.rs

use serde::{Deserialize, Serialize};

/// How a flag is rendered for a given picker instance.
///
/// This is an explicit per-instance configuration value. Pickers with
/// different flag modes can coexist in one process; there is no global
/// dataset switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagMode {
    /// Derive the flag glyph from the cca2 code via Unicode regional
    /// indicator symbols. No catalog data required.
    #[default]
    Emoji,
    /// Use the `flag` URI carried by the catalog record, if any. The
    /// presentation layer owns asset resolution.
    Image,
}

const REGIONAL_INDICATOR_BASE: u32 = 0x1F1E6;

/// Build the emoji flag for an ISO-3166-1 alpha-2 code.
///
/// Returns `None` unless the input is exactly two ASCII letters. The input
/// may be lowercase; `"de"` and `"DE"` both yield `🇩🇪`.
pub fn emoji_flag(cca2: &str) -> Option<String> {
    let mut out = String::with_capacity(8);
    let mut count = 0usize;
    for ch in cca2.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let offset = ch.to_ascii_uppercase() as u32 - 'A' as u32;
        out.push(char::from_u32(REGIONAL_INDICATOR_BASE + offset)?);
        count += 1;
    }
    if count == 2 {
        Some(out)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_flag_from_cca2() {
        assert_eq!(emoji_flag("DE"), Some("🇩🇪".to_string()));
        assert_eq!(emoji_flag("us"), Some("🇺🇸".to_string()));
    }

    #[test]
    fn rejects_invalid_codes() {
        assert_eq!(emoji_flag(""), None);
        assert_eq!(emoji_flag("D"), None);
        assert_eq!(emoji_flag("DEU"), None);
        assert_eq!(emoji_flag("D3"), None);
    }
}
