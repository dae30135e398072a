// crates/countrypick-core/src/score.rs

//! # Fuzzy relevance scoring
//!
//! Tiered scoring over folded keys (see [`crate::text::fold_key`]):
//!
//! - exact match: **1.0**
//! - prefix match: **0.9**
//! - substring match: **0.8**, decaying towards 0.6 the further the hit
//!   sits from the start of the name (`distance` window)
//! - typo-tolerant match: normalized Damerau-Levenshtein similarity scaled
//!   into `(0, 0.6]`, accepted while the normalized edit distance stays
//!   within `threshold`
//!
//! The tiers guarantee that typing the full, exact display name always
//! ranks that entry first, and that a misspelled query ("Urnited Statez")
//! still finds its target without outranking literal substring hits.

use crate::config::FilterOptions;

const PREFIX_SCORE: f64 = 0.9;
const SUBSTRING_SCORE: f64 = 0.8;
const SUBSTRING_DECAY: f64 = 0.2;
const TOLERANT_SCALE: f64 = 0.6;

/// Score a folded query against a folded display name.
///
/// Both inputs must already be normalized with [`crate::text::fold_key`].
/// Returns `None` when the name does not match under `options`.
pub fn score(query_key: &str, name_key: &str, options: &FilterOptions) -> Option<f64> {
    let query_len = query_key.chars().count();
    if query_len < options.min_match_length || query_len > options.max_pattern_length {
        return None;
    }

    if name_key == query_key {
        return Some(1.0);
    }
    if name_key.starts_with(query_key) {
        return Some(PREFIX_SCORE);
    }
    if let Some(pos) = name_key.find(query_key) {
        let chars_before = name_key[..pos].chars().count();
        let decay = (chars_before as f64 / options.distance.max(1) as f64).min(1.0);
        return Some(SUBSTRING_SCORE - SUBSTRING_DECAY * decay);
    }

    // Typo-tolerant tier: compare against the whole name and against the
    // query-length prefix window, so misspelled prefixes still match.
    let mut similarity = strsim::normalized_damerau_levenshtein(query_key, name_key);
    let window: String = name_key.chars().take(query_len).collect();
    if window.len() < name_key.len() {
        similarity = similarity.max(strsim::normalized_damerau_levenshtein(query_key, &window));
    }

    if 1.0 - similarity <= options.threshold {
        Some(similarity * TOLERANT_SCALE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::fold_key;

    fn score_names(query: &str, name: &str) -> Option<f64> {
        score(
            &fold_key(query),
            &fold_key(name),
            &FilterOptions::default(),
        )
    }

    #[test]
    fn exact_name_is_a_perfect_match() {
        assert_eq!(score_names("United States", "United States"), Some(1.0));
    }

    #[test]
    fn prefix_outranks_substring() {
        let prefix = score_names("Ger", "Germany").unwrap();
        let substring = score_names("many", "Germany").unwrap();
        assert!(prefix > substring);
        assert!(substring > 0.6);
    }

    #[test]
    fn misspelled_query_still_matches() {
        let hit = score_names("Urnited Statez", "United States").unwrap();
        assert!(hit > 0.0 && hit <= 0.6);
        assert_eq!(score_names("Urnited Statez", "France"), None);
    }

    #[test]
    fn exact_match_outranks_everything() {
        let exact = score_names("France", "France").unwrap();
        let fuzzy = score_names("France", "Frances Island").unwrap();
        assert!(exact > fuzzy);
    }

    #[test]
    fn substring_hits_decay_with_position() {
        let options = FilterOptions {
            distance: 10,
            ..FilterOptions::default()
        };
        let early = score(&fold_key("an"), &fold_key("Bangladesh"), &options).unwrap();
        let late = score(&fold_key("an"), &fold_key("Azerbaijan"), &options).unwrap();
        assert!(early > late);
    }

    #[test]
    fn length_bounds_are_enforced() {
        let options = FilterOptions {
            min_match_length: 2,
            max_pattern_length: 4,
            ..FilterOptions::default()
        };
        assert_eq!(score("g", "germany", &options), None);
        assert_eq!(score("german", "germany", &options), None);
        assert!(score("ger", "germany", &options).is_some());
    }

    #[test]
    fn accents_fold_before_scoring() {
        assert_eq!(score_names("turkiye", "Türkiye"), Some(1.0));
    }
}
