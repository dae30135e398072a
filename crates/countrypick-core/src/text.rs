// crates/countrypick-core/src/text.rs

/// Convert a string into a folded key suitable for matching and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
///
/// # Examples
///
/// ```rust
/// use countrypick_core::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// Case-insensitive and accent-insensitive: both strings are transliterated
/// to ASCII (via `deunicode`) and lowercased before comparison.
///
/// # Examples
///
/// ```rust
/// use countrypick_core::equals_folded;
///
/// assert!(equals_folded("Türkiye", "turkiye"));
/// assert!(equals_folded("RÉUNION", "reunion"));
/// assert!(!equals_folded("Chad", "Chile"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// First character of a display name, uppercased, as used by the alphabet
/// index and the scroll-target lookup.
///
/// Returns `None` for empty strings. Multi-character uppercase expansions
/// (e.g. `ß` → `SS`) keep only the leading character.
pub fn index_letter(name: &str) -> Option<char> {
    let first = name.chars().next()?;
    first.to_uppercase().next()
}
