// crates/countrypick-core/src/controller.rs

//! # Selection list controller
//!
//! Owns the working list of selectable country codes (sorted, minus
//! exclusions), the free-text filter and its fuzzy-match result, and the
//! derived alphabet index. The presentation layer drives it from UI
//! events and renders whatever ordered list comes back; all pixel
//! geometry, modal handling and asset resolution stay on the
//! presentation side.

use crate::catalog::{Catalog, CountryRecord};
use crate::config::PickerConfig;
use crate::error::Result;
use crate::flag::{emoji_flag, FlagMode};
use crate::score::score;
use crate::text::{fold_key, index_letter};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

/// The payload handed to the host when a country is selected.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub cca2: String,
    /// Display name resolved under the active translation and list mode.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calling_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

/// A display-ready list row for the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub cca2: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    /// Present only when the picker is configured to show calling codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calling_code: Option<String>,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_text: Option<String>,
}

type ChangeHandler = Box<dyn FnMut(&Selection)>;
type CloseHandler = Box<dyn FnMut()>;

/// Per-picker selection state over an immutable shared catalog.
///
/// Invariants:
/// - the working list only holds codes known to the catalog and not
///   excluded by configuration;
/// - the filtered list, when present, is a subset of the working list;
/// - the alphabet index is always derived from the working list, never
///   from the filtered one.
pub struct SelectionList {
    catalog: Arc<Catalog>,
    config: PickerConfig,
    working: Vec<String>,
    disabled: HashSet<String>,
    filter: String,
    filtered: Option<Vec<String>>,
    letters: Vec<char>,
    on_change: Option<ChangeHandler>,
    on_close: Option<CloseHandler>,
}

impl SelectionList {
    /// Build a controller from a catalog and configuration.
    ///
    /// Codes referenced by the candidate, excluded or disabled lists that
    /// the catalog does not know are silently dropped.
    pub fn new(catalog: Arc<Catalog>, config: PickerConfig) -> Self {
        let mut list = SelectionList {
            catalog,
            config,
            working: Vec::new(),
            disabled: HashSet::new(),
            filter: String::new(),
            filtered: None,
            letters: Vec::new(),
            on_change: None,
            on_close: None,
        };
        list.rebuild();
        list
    }

    /// Controller over the whole bundled catalog with default settings.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(Catalog::bundled()?, PickerConfig::default()))
    }

    /// Register the selection callback.
    pub fn set_on_change(&mut self, handler: impl FnMut(&Selection) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// Register the close callback.
    pub fn set_on_close(&mut self, handler: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(handler));
    }

    /// Replace the candidate code list and rebuild the working list and
    /// alphabet index. `None` reverts to the whole catalog.
    pub fn set_country_list(&mut self, country_list: Option<Vec<String>>) {
        self.config.country_list = country_list;
        self.rebuild();
    }

    /// Switch the active translation and rebuild, since display names and
    /// therefore sort order and index letters change with it.
    pub fn set_translation(&mut self, translation: impl Into<String>) {
        self.config.translation = translation.into();
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let catalog = Arc::clone(&self.catalog);

        let excluded: HashSet<String> = self
            .config
            .excluded_countries
            .iter()
            .map(|c| c.to_ascii_uppercase())
            .collect();

        self.disabled = self
            .config
            .disabled_countries
            .iter()
            .filter(|c| catalog.find(c.as_str()).is_some())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        // Decorate with the resolved name, stable-sort, undecorate. The
        // compare is case-sensitive lexicographic; ties keep candidate
        // order.
        let candidates: Vec<&str> = match &self.config.country_list {
            Some(list) => list.iter().map(String::as_str).collect(),
            None => catalog.codes().collect(),
        };
        let mut decorated: Vec<(&str, String)> = candidates
            .into_iter()
            .filter_map(|code| catalog.find(code))
            .filter(|record| self.config.mode.includes(record))
            .filter(|record| !excluded.contains(&record.cca2.to_ascii_uppercase()))
            .map(|record| (self.resolved_name(record), record.cca2.clone()))
            .collect();
        decorated.sort_by(|a, b| a.0.cmp(b.0));
        self.working = decorated.into_iter().map(|(_, code)| code).collect();

        self.letters = self.compute_letters();
        self.filter.clear();
        self.filtered = None;
    }

    fn compute_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .working
            .iter()
            .filter_map(|code| self.catalog.find(code))
            .filter_map(|record| index_letter(self.resolved_name(record)))
            .collect();
        letters.sort_unstable();
        letters.dedup();
        letters
    }

    fn resolved_name<'a>(&self, record: &'a CountryRecord) -> &'a str {
        self.config.mode.display_name(record, &self.config.translation)
    }

    fn flag_for(&self, record: &CountryRecord) -> Option<String> {
        if self.config.hide_flags {
            return None;
        }
        match self.config.flag_mode {
            FlagMode::Emoji => emoji_flag(&record.cca2),
            FlagMode::Image => record.flag.clone(),
        }
    }

    /// The full working list: sorted candidate codes minus exclusions.
    pub fn working(&self) -> &[String] {
        &self.working
    }

    /// The currently displayable ordered code list: the fuzzy-match
    /// result while a filter is active, the working list otherwise.
    pub fn visible(&self) -> &[String] {
        self.filtered.as_deref().unwrap_or(&self.working)
    }

    /// The alphabet index: distinct uppercased first letters of the
    /// working list's display names, ascending.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The current free-text filter; empty means no filter.
    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    /// Whether a code is visible but not selectable.
    pub fn is_disabled(&self, cca2: &str) -> bool {
        self.disabled.contains(&cca2.to_ascii_uppercase())
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Apply a free-text filter and return the now-visible code list.
    ///
    /// An empty query clears the filter and reverts to the full working
    /// list. A non-empty query fuzzy-matches against the resolved display
    /// names of the working list and orders matches by descending
    /// relevance, ties keeping working-list order. Either way the caller
    /// should reset its scroll offset to the top after this returns.
    pub fn set_filter(&mut self, query: &str) -> &[String] {
        self.filter = query.to_string();
        if query.is_empty() {
            self.filtered = None;
            return self.visible();
        }

        let needle = fold_key(query);
        let options = self.config.filter_options;
        let mut hits: Vec<(f64, String)> = Vec::new();
        for code in &self.working {
            let Some(record) = self.catalog.find(code) else {
                continue;
            };
            let name_key = fold_key(self.resolved_name(record));
            if let Some(relevance) = score(&needle, &name_key, &options) {
                hits.push((relevance, code.clone()));
            }
        }
        // Stable sort: equal scores keep working-list order.
        hits.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        self.filtered = Some(hits.into_iter().map(|(_, code)| code).collect());
        self.visible()
    }

    /// Ordinal position in the *unfiltered* working list of the first
    /// entry whose display name starts with `letter` (case-insensitive),
    /// or `None` when no entry matches.
    pub fn scroll_target(&self, letter: char) -> Option<usize> {
        let target = letter.to_uppercase().next()?;
        self.working.iter().position(|code| {
            self.catalog
                .find(code)
                .and_then(|record| index_letter(self.resolved_name(record)))
                == Some(target)
        })
    }

    /// Select a country by code.
    ///
    /// Disabled codes are a no-op: no callback fires and `Ok(None)` comes
    /// back. Otherwise the resolved [`Selection`] goes to the `on_change`
    /// handler (if any), the filter state resets, and the selection is
    /// returned. An unknown code is a programming error and fails fast.
    pub fn select(&mut self, cca2: &str) -> Result<Option<Selection>> {
        let catalog = Arc::clone(&self.catalog);
        let record = catalog.record(cca2)?;
        if self.disabled.contains(&record.cca2.to_ascii_uppercase()) {
            return Ok(None);
        }

        let selection = Selection {
            cca2: record.cca2.clone(),
            name: self.resolved_name(record).to_string(),
            calling_code: record.calling_code.clone(),
            currency: record.currency.clone(),
            flag: self.flag_for(record),
        };

        self.filter.clear();
        self.filtered = None;
        if let Some(handler) = self.on_change.as_mut() {
            handler(&selection);
        }
        Ok(Some(selection))
    }

    /// Close the picker: reset the filter state and notify the host.
    pub fn close(&mut self) {
        self.filter.clear();
        self.filtered = None;
        if let Some(handler) = self.on_close.as_mut() {
            handler();
        }
    }

    /// Display-ready rows for the currently visible list.
    pub fn rows(&self) -> Vec<DisplayRow> {
        self.visible()
            .iter()
            .filter_map(|code| self.catalog.find(code))
            .map(|record| self.row_for(record))
            .collect()
    }

    fn row_for(&self, record: &CountryRecord) -> DisplayRow {
        let disabled = self.is_disabled(&record.cca2);
        let disabled_text = if disabled {
            record
                .language
                .as_ref()
                .and_then(|l| l.disabled_text.clone())
                .or_else(|| self.config.disabled_country_text.clone())
        } else {
            None
        };
        let calling_code = if self.config.show_calling_code {
            record.calling_code.clone()
        } else {
            None
        };
        DisplayRow {
            cca2: record.cca2.clone(),
            name: self.resolved_name(record).to_string(),
            flag: self.flag_for(record),
            calling_code,
            disabled,
            disabled_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListMode;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fixture_catalog() -> Arc<Catalog> {
        let json = r#"[
            {"cca2":"US","name":{"common":"United States"},"callingCode":"1","currency":"USD","language":{"name":"English"}},
            {"cca2":"DE","name":{"common":"Germany","deu":"Deutschland"},"callingCode":"49","currency":"EUR","language":{"name":"German"}},
            {"cca2":"FR","name":{"common":"France","deu":"Frankreich"},"callingCode":"33","currency":"EUR","language":{"name":"French"}},
            {"cca2":"GE","name":{"common":"Georgia"},"callingCode":"995"}
        ]"#;
        Arc::new(Catalog::from_json_str(json).unwrap())
    }

    fn picker(config: PickerConfig) -> SelectionList {
        SelectionList::new(fixture_catalog(), config)
    }

    fn three_country_config() -> PickerConfig {
        PickerConfig {
            country_list: Some(vec!["FR".into(), "US".into(), "DE".into()]),
            ..PickerConfig::default()
        }
    }

    #[test]
    fn working_list_sorts_by_display_name() {
        let list = picker(three_country_config());
        assert_eq!(list.working(), ["FR", "DE", "US"]);
        assert_eq!(list.letters(), ['F', 'G', 'U']);
    }

    #[test]
    fn translation_changes_sort_order_and_letters() {
        let mut list = picker(three_country_config());
        list.set_translation("deu");
        // Deutschland, Frankreich, United States (no deu override for US).
        assert_eq!(list.working(), ["DE", "FR", "US"]);
        assert_eq!(list.letters(), ['D', 'F', 'U']);
    }

    #[test]
    fn excluded_codes_never_appear() {
        let config = PickerConfig {
            excluded_countries: vec!["DE".into()],
            ..three_country_config()
        };
        let mut list = picker(config);
        assert_eq!(list.working(), ["FR", "US"]);
        let visible = list.set_filter("Germany").to_vec();
        assert!(visible.is_empty());
    }

    #[test]
    fn unknown_configured_codes_are_dropped() {
        let config = PickerConfig {
            country_list: Some(vec!["FR".into(), "XX".into(), "US".into()]),
            disabled_countries: vec!["YY".into(), "US".into()],
            ..PickerConfig::default()
        };
        let list = picker(config);
        assert_eq!(list.working(), ["FR", "US"]);
        assert!(list.is_disabled("US"));
        assert!(!list.is_disabled("YY"));
    }

    #[test]
    fn empty_filter_reverts_to_working_order() {
        let mut list = picker(three_country_config());
        list.set_filter("fra");
        assert_eq!(list.filter_text(), "fra");
        let visible = list.set_filter("");
        assert_eq!(visible, ["FR", "DE", "US"]);
        assert_eq!(list.filter_text(), "");
    }

    #[test]
    fn exact_name_filter_returns_that_entry_first() {
        let mut list = picker(three_country_config());
        let visible = list.set_filter("United States");
        assert_eq!(visible.first().map(String::as_str), Some("US"));
    }

    #[test]
    fn misspelled_filter_still_finds_the_country() {
        let mut list = picker(three_country_config());
        let visible = list.set_filter("Urnited Statez");
        assert_eq!(visible, ["US"]);
    }

    #[test]
    fn filtered_is_a_subset_of_working() {
        let mut list = picker(PickerConfig::default());
        let visible: Vec<String> = list.set_filter("ge").to_vec();
        assert!(!visible.is_empty());
        for code in &visible {
            assert!(list.working().contains(code));
        }
    }

    #[test]
    fn scroll_target_finds_first_entry_for_letter() {
        let list = picker(three_country_config());
        assert_eq!(list.scroll_target('U'), Some(2));
        assert_eq!(list.scroll_target('u'), Some(2));
        assert_eq!(list.scroll_target('Z'), None);
    }

    #[test]
    fn scroll_target_ignores_the_active_filter() {
        let mut list = picker(three_country_config());
        list.set_filter("France");
        assert_eq!(list.scroll_target('U'), Some(2));
    }

    #[test]
    fn select_emits_resolved_record_and_resets_filter() {
        let selections: Rc<RefCell<Vec<Selection>>> = Rc::default();
        let sink = Rc::clone(&selections);

        let mut list = picker(three_country_config());
        list.set_on_change(move |s| sink.borrow_mut().push(s.clone()));

        list.set_filter("germ");
        let selected = list.select("DE").unwrap().expect("DE is selectable");
        assert_eq!(selected.name, "Germany");
        assert_eq!(selected.calling_code.as_deref(), Some("49"));
        assert_eq!(selected.flag.as_deref(), Some("🇩🇪"));
        assert_eq!(selections.borrow().len(), 1);
        assert_eq!(selections.borrow()[0], selected);
        assert_eq!(list.filter_text(), "");
        assert_eq!(list.visible(), list.working());
    }

    #[test]
    fn select_on_disabled_is_a_no_op() {
        let fired = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&fired);

        let config = PickerConfig {
            disabled_countries: vec!["de".into()],
            ..three_country_config()
        };
        let mut list = picker(config);
        list.set_on_change(move |_| *sink.borrow_mut() += 1);

        assert!(list.select("DE").unwrap().is_none());
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn select_unknown_code_fails_fast() {
        let mut list = picker(three_country_config());
        assert!(matches!(
            list.select("ZZ"),
            Err(crate::error::PickerError::UnknownCode(_))
        ));
    }

    #[test]
    fn close_resets_filter_and_notifies() {
        let closed = Rc::new(RefCell::new(false));
        let sink = Rc::clone(&closed);

        let mut list = picker(three_country_config());
        list.set_on_close(move || *sink.borrow_mut() = true);
        list.set_filter("fran");
        list.close();
        assert!(*closed.borrow());
        assert_eq!(list.filter_text(), "");
        assert_eq!(list.visible(), list.working());
    }

    #[test]
    fn languages_mode_projects_language_names() {
        let config = PickerConfig {
            mode: ListMode::Languages,
            ..PickerConfig::default()
        };
        let list = picker(config);
        // GE has no language info and drops out of the working list.
        assert_eq!(list.working(), ["US", "FR", "DE"]);
        assert_eq!(list.letters(), ['E', 'F', 'G']);
        assert_eq!(list.scroll_target('G'), Some(2));
    }

    #[test]
    fn rows_carry_presentation_details() {
        let config = PickerConfig {
            disabled_countries: vec!["DE".into()],
            disabled_country_text: Some("unavailable".into()),
            show_calling_code: true,
            ..three_country_config()
        };
        let list = picker(config);
        let rows = list.rows();
        assert_eq!(rows.len(), 3);

        let de = rows.iter().find(|r| r.cca2 == "DE").unwrap();
        assert!(de.disabled);
        assert_eq!(de.disabled_text.as_deref(), Some("unavailable"));
        assert_eq!(de.calling_code.as_deref(), Some("49"));

        let fr = rows.iter().find(|r| r.cca2 == "FR").unwrap();
        assert!(!fr.disabled);
        assert_eq!(fr.disabled_text, None);
        assert_eq!(fr.flag.as_deref(), Some("🇫🇷"));
    }

    #[test]
    fn hide_flags_suppresses_flag_fields() {
        let config = PickerConfig {
            hide_flags: true,
            ..three_country_config()
        };
        let list = picker(config);
        assert!(list.rows().iter().all(|r| r.flag.is_none()));
    }

    #[test]
    fn replacing_the_candidate_list_recomputes_the_index() {
        let mut list = picker(three_country_config());
        list.set_country_list(Some(vec!["GE".into(), "FR".into()]));
        assert_eq!(list.working(), ["FR", "GE"]);
        assert_eq!(list.letters(), ['F', 'G']);
    }
}
