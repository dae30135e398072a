// crates/countrypick-core/src/catalog.rs

//! # Country catalog
//!
//! Static reference data: one immutable [`CountryRecord`] per country,
//! loaded once and never mutated. The record order in the source JSON is
//! the canonical catalog order and serves as the tie-break order for every
//! downstream sort.

use crate::error::{PickerError, Result};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use std::sync::Arc;

static BUNDLED: OnceCell<Arc<Catalog>> = OnceCell::new();

const BUNDLED_JSON: &str = include_str!("../data/countries.json");

/// Display names for a country: a `common` fallback plus per-translation
/// overrides keyed by translation key (e.g. `"deu"`, `"fra"`).
///
/// JSON shape matches the bundled dataset:
/// `{ "common": "Germany", "deu": "Deutschland", "fra": "Allemagne" }`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(flatten)]
    pub translations: HashMap<String, String>,
}

impl CountryName {
    /// Resolve the display name under `translation`, falling back to the
    /// common name when no override exists for that key.
    pub fn resolve(&self, translation: &str) -> &str {
        self.translations
            .get(translation)
            .map(String::as_str)
            .unwrap_or(&self.common)
    }
}

/// Primary language spoken in a country, used by languages-mode pickers.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_text: Option<String>,
}

/// A country entry in the catalog. Immutable value sourced from static
/// data; `cca2` is the primary key.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub cca2: String,
    pub name: CountryName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calling_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Flag asset reference (URI or glyph id) for image-flag rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageInfo>,
}

impl CountryRecord {
    /// Country display name under the given translation key.
    pub fn display_name(&self, translation: &str) -> &str {
        self.name.resolve(translation)
    }

    /// Calling code rendered as a string (e.g. "49"), empty when unknown.
    pub fn calling_code(&self) -> &str {
        self.calling_code.as_deref().unwrap_or("")
    }
}

/// The country catalog: an ordered, immutable list of records.
///
/// Lookup by cca2 is a case-insensitive linear scan; the catalog holds a
/// few hundred entries at most, so no index is warranted.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    countries: Vec<CountryRecord>,
}

impl Catalog {
    /// Build a catalog from records, validating that it is non-empty and
    /// that cca2 keys are unique (case-insensitive).
    pub fn from_records(countries: Vec<CountryRecord>) -> Result<Self> {
        if countries.is_empty() {
            return Err(PickerError::EmptyCatalog);
        }
        let mut seen: HashSet<String> = HashSet::with_capacity(countries.len());
        for record in &countries {
            if !seen.insert(record.cca2.to_ascii_uppercase()) {
                return Err(PickerError::DuplicateCode(record.cca2.clone()));
            }
        }
        Ok(Catalog { countries })
    }

    /// Parse a catalog from a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let countries: Vec<CountryRecord> = serde_json::from_str(json)?;
        Self::from_records(countries)
    }

    /// Parse a catalog from any reader yielding the JSON array.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let countries: Vec<CountryRecord> = serde_json::from_reader(reader)?;
        Self::from_records(countries)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                PickerError::NotFound(format!("catalog not found at {}", path.display()))
            }
            _ => PickerError::Io(e),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// The bundled default dataset, parsed once per process and shared
    /// across picker instances.
    pub fn bundled() -> Result<Arc<Catalog>> {
        BUNDLED
            .get_or_try_init(|| Self::from_json_str(BUNDLED_JSON).map(Arc::new))
            .cloned()
    }

    /// All records in canonical catalog order.
    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Iterate over the cca2 codes in canonical catalog order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(|c| c.cca2.as_str())
    }

    /// Find a record by cca2 code, case-insensitive (e.g. "DE", "us").
    pub fn find(&self, cca2: &str) -> Option<&CountryRecord> {
        self.countries
            .iter()
            .find(|c| c.cca2.eq_ignore_ascii_case(cca2))
    }

    /// Like [`Catalog::find`], but an unknown code is an error.
    pub fn record(&self, cca2: &str) -> Result<&CountryRecord> {
        self.find(cca2)
            .ok_or_else(|| PickerError::UnknownCode(cca2.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"cca2":"DE","name":{"common":"Germany","deu":"Deutschland"},"callingCode":"49","currency":"EUR"},
        {"cca2":"FR","name":{"common":"France"},"callingCode":"33"}
    ]"#;

    #[test]
    fn parses_records_from_json() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        let de = catalog.find("de").unwrap();
        assert_eq!(de.display_name("eng"), "Germany");
        assert_eq!(de.display_name("deu"), "Deutschland");
        assert_eq!(de.calling_code(), "49");
    }

    #[test]
    fn unknown_code_is_an_error() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert!(matches!(
            catalog.record("ZZ"),
            Err(PickerError::UnknownCode(code)) if code == "ZZ"
        ));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(
            Catalog::from_json_str("[]"),
            Err(PickerError::EmptyCatalog)
        ));
    }

    #[test]
    fn rejects_duplicate_codes() {
        let json = r#"[
            {"cca2":"DE","name":{"common":"Germany"}},
            {"cca2":"de","name":{"common":"Germany again"}}
        ]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(PickerError::DuplicateCode(_))
        ));
    }

    #[test]
    fn bundled_catalog_is_valid_and_unique() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.len() > 100);
        assert!(catalog.find("US").is_some());
        assert!(catalog.find("DE").is_some());
        // from_records already enforces uniqueness; a second call must hit
        // the same shared instance.
        let again = Catalog::bundled().unwrap();
        assert!(Arc::ptr_eq(&catalog, &again));
    }
}
