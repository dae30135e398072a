// crates/countrypick-core/src/config.rs

use crate::catalog::CountryRecord;
use crate::flag::FlagMode;
use serde::{Deserialize, Serialize};

/// What kind of list the picker presents.
///
/// The variant is resolved once at configuration time and carries its own
/// name projection; rows never re-branch on a data-type flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    #[default]
    Countries,
    Languages,
}

impl ListMode {
    /// Resolve the display name of a record under this mode.
    ///
    /// Countries mode resolves through the translation table with the
    /// common name as fallback. Languages mode projects the language name;
    /// records without language info fall back to the country name (they
    /// are dropped from working lists at build time, so this fallback only
    /// matters for direct record access).
    pub fn display_name<'a>(&self, record: &'a CountryRecord, translation: &str) -> &'a str {
        match self {
            ListMode::Countries => record.name.resolve(translation),
            ListMode::Languages => record
                .language
                .as_ref()
                .map(|l| l.name.as_str())
                .unwrap_or_else(|| record.name.resolve(translation)),
        }
    }

    /// Whether a record is listable under this mode.
    pub fn includes(&self, record: &CountryRecord) -> bool {
        match self {
            ListMode::Countries => true,
            ListMode::Languages => record.language.is_some(),
        }
    }
}

/// Fuzzy-match tuning, Fuse-style: an edit-distance acceptance threshold,
/// a positional bias window and pattern-length bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    /// Maximum normalized edit distance for the typo-tolerant tier.
    /// 0.0 requires a perfect match, 1.0 matches anything.
    pub threshold: f64,
    /// Window, in characters, over which a substring hit decays from the
    /// start of the name. Matches near the start rank higher.
    pub distance: usize,
    /// Queries shorter than this never match.
    pub min_match_length: usize,
    /// Queries longer than this never match.
    pub max_pattern_length: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        FilterOptions {
            threshold: 0.6,
            distance: 100,
            min_match_length: 1,
            max_pattern_length: 32,
        }
    }
}

/// Construction-time configuration for one picker instance.
///
/// Everything here is an explicit immutable value; pickers with different
/// translations, flag modes or candidate lists coexist without
/// interference. Presentation-only fields (`filter_placeholder`,
/// `hide_alphabet_rail`) are carried for the presentation layer to read;
/// the controller does not interpret them.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerConfig {
    /// Translation key selecting which display name to use (e.g. "eng").
    pub translation: String,
    /// Candidate cca2 codes, in tie-break order. `None` means the whole
    /// catalog in canonical order.
    pub country_list: Option<Vec<String>>,
    /// Codes removed from the working list entirely.
    pub excluded_countries: Vec<String>,
    /// Codes shown but not selectable.
    pub disabled_countries: Vec<String>,
    /// Suffix text presented on disabled rows.
    pub disabled_country_text: Option<String>,
    pub mode: ListMode,
    pub flag_mode: FlagMode,
    pub filter_options: FilterOptions,
    pub filter_placeholder: String,
    /// Append " (+NN)" calling-code suffixes to row names.
    pub show_calling_code: bool,
    pub hide_flags: bool,
    pub hide_alphabet_rail: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            translation: "eng".to_string(),
            country_list: None,
            excluded_countries: Vec::new(),
            disabled_countries: Vec::new(),
            disabled_country_text: None,
            mode: ListMode::default(),
            flag_mode: FlagMode::default(),
            filter_options: FilterOptions::default(),
            filter_placeholder: "Filter".to_string(),
            show_calling_code: false,
            hide_flags: false,
            hide_alphabet_rail: false,
        }
    }
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
