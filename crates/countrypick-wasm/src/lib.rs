//! countrypick-wasm — WebAssembly bindings for countrypick-core
//!
//! This crate exposes the selection-list controller to JavaScript. The
//! bundled country catalog is embedded in the WASM binary, so a picker
//! works out of the box with no network fetch.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - A [`CountryPicker`] class wrapping one selection list:
//!   - `rows()`, `letters()`, `visible()` for rendering
//!   - `setFilter(query)` for typo-tolerant filtering
//!   - `scrollTarget(letter)` / `scrollOffset(...)` for the alphabet rail
//!   - `select(cca2)` / `close()` with JS callbacks via `onChange`/`onClose`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CountryPicker } from 'countrypick-wasm';
//!
//! async function main() {
//!   await init();
//!   const picker = new CountryPicker({ translation: 'deu', excludedCountries: ['RU'] });
//!   picker.onChange((selection) => console.log('picked', selection.cca2));
//!   picker.setFilter('germny');
//!   console.log(picker.rows());
//!   picker.select('DE');
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Configuration objects use the same camelCase keys as the JSON catalog
//!   (`countryList`, `excludedCountries`, `disabledCountries`, ...).
//! - All exported methods return plain types or `JsValue` containing
//!   JSON-serializable arrays/objects.
use wasm_bindgen::prelude::*;

use countrypick_core::prelude::*;
use serde_wasm_bindgen::to_value;
use std::result::Result;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Warm the embedded catalog so the first picker construction is cheap.
    match Catalog::bundled() {
        Ok(catalog) => {
            web_sys::console::log_1(&format!("✓ Loaded {} countries", catalog.len()).into());
        }
        Err(e) => web_sys::console::error_1(&format!("catalog load failed: {e}").into()),
    }
}

/// One country picker instance over the embedded catalog.
#[wasm_bindgen]
pub struct CountryPicker {
    list: SelectionList,
}

#[wasm_bindgen]
impl CountryPicker {
    /// Build a picker from a configuration object (or `undefined` for the
    /// defaults). Keys mirror [`PickerConfig`] in camelCase.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CountryPicker, JsError> {
        let config = parse_config(config)?;
        let catalog = Catalog::bundled()?;
        Ok(CountryPicker {
            list: SelectionList::new(catalog, config),
        })
    }

    /// Build a picker over a caller-supplied catalog JSON string instead of
    /// the embedded one.
    #[wasm_bindgen(js_name = withCatalog)]
    pub fn with_catalog(catalog_json: &str, config: JsValue) -> Result<CountryPicker, JsError> {
        let config = parse_config(config)?;
        let catalog = std::sync::Arc::new(Catalog::from_json_str(catalog_json)?);
        Ok(CountryPicker {
            list: SelectionList::new(catalog, config),
        })
    }

    /// Display-ready rows for the currently visible list.
    pub fn rows(&self) -> JsValue {
        to_value(&self.list.rows()).unwrap()
    }

    /// ISO2 codes of the currently visible list, in display order.
    pub fn visible(&self) -> JsValue {
        to_value(self.list.visible()).unwrap()
    }

    /// The alphabet rail letters, derived from the unfiltered list.
    pub fn letters(&self) -> JsValue {
        let letters: Vec<String> = self.list.letters().iter().map(|l| l.to_string()).collect();
        to_value(&letters).unwrap()
    }

    /// Apply a fuzzy filter query and return the matching rows.
    #[wasm_bindgen(js_name = setFilter)]
    pub fn set_filter(&mut self, query: &str) -> JsValue {
        self.list.set_filter(query);
        self.rows()
    }

    #[wasm_bindgen(js_name = filterText)]
    pub fn filter_text(&self) -> String {
        self.list.filter_text().to_string()
    }

    /// Row ordinal the unfiltered list scrolls to for an index letter.
    #[wasm_bindgen(js_name = scrollTarget)]
    pub fn scroll_target(&self, letter: char) -> Option<usize> {
        self.list.scroll_target(letter)
    }

    /// Pixel offset for an index letter given row height and viewport
    /// extent, clamped so the list never overscrolls.
    #[wasm_bindgen(js_name = scrollOffset)]
    pub fn scroll_offset(
        &self,
        letter: char,
        row_height: f32,
        visible_extent: f32,
    ) -> Option<f32> {
        let metrics = ListMetrics::new(row_height, visible_extent);
        self.list
            .scroll_target(letter)
            .map(|ordinal| metrics.offset_for(ordinal, self.list.working().len()))
    }

    /// Select a country by ISO2 code. Returns the selection payload, or
    /// `null` when the code is disabled. Unknown codes throw.
    pub fn select(&mut self, cca2: &str) -> Result<JsValue, JsError> {
        match self.list.select(cca2)? {
            Some(selection) => Ok(to_value(&selection).unwrap()),
            None => Ok(JsValue::NULL),
        }
    }

    /// Close the picker: reset filter state and fire the close callback.
    pub fn close(&mut self) {
        self.list.close();
    }

    /// Register a callback invoked with the selection payload.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: js_sys::Function) {
        self.list.set_on_change(move |selection| {
            let payload = to_value(selection).unwrap_or(JsValue::NULL);
            let _ = callback.call1(&JsValue::NULL, &payload);
        });
    }

    /// Register a callback invoked when the picker closes.
    #[wasm_bindgen(js_name = onClose)]
    pub fn on_close(&mut self, callback: js_sys::Function) {
        self.list.set_on_close(move || {
            let _ = callback.call0(&JsValue::NULL);
        });
    }

    /// Replace the candidate code list (`null` reverts to the full catalog).
    #[wasm_bindgen(js_name = setCountryList)]
    pub fn set_country_list(&mut self, codes: JsValue) -> Result<(), JsError> {
        let codes: Option<Vec<String>> = if codes.is_undefined() || codes.is_null() {
            None
        } else {
            Some(serde_wasm_bindgen::from_value(codes)?)
        };
        self.list.set_country_list(codes);
        Ok(())
    }

    /// Switch the active translation (e.g. `"deu"`).
    #[wasm_bindgen(js_name = setTranslation)]
    pub fn set_translation(&mut self, translation: &str) {
        self.list.set_translation(translation);
    }

    /// Placeholder text for the filter input, from the configuration.
    #[wasm_bindgen(js_name = filterPlaceholder)]
    pub fn filter_placeholder(&self) -> String {
        self.list.config().filter_placeholder.clone()
    }

    /// Whether the host should omit the alphabet rail, from the
    /// configuration.
    #[wasm_bindgen(js_name = hideAlphabetRail)]
    pub fn hide_alphabet_rail(&self) -> bool {
        self.list.config().hide_alphabet_rail
    }

    /// Number of entries in the unfiltered list.
    #[wasm_bindgen(js_name = countryCount)]
    pub fn country_count(&self) -> usize {
        self.list.working().len()
    }
}

fn parse_config(config: JsValue) -> Result<PickerConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        Ok(PickerConfig::default())
    } else {
        Ok(serde_wasm_bindgen::from_value(config)?)
    }
}
