use wasm_bindgen_test::*;

use countrypick_wasm::CountryPicker;
use wasm_bindgen::JsValue;

#[wasm_bindgen_test]
fn picker_builds_with_defaults() {
    let picker = CountryPicker::new(JsValue::UNDEFINED).expect("default picker");
    assert!(picker.country_count() > 0);
}

#[wasm_bindgen_test]
fn filter_and_select_roundtrip() {
    let mut picker = CountryPicker::new(JsValue::UNDEFINED).expect("default picker");

    picker.set_filter("germny");
    let selection = picker.select("DE").expect("known code");
    assert!(!selection.is_null());

    // Selection resets the filter.
    assert_eq!(picker.filter_text(), "");
}

#[wasm_bindgen_test]
fn presentation_fields_reach_the_host() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"hideAlphabetRail".into(), &JsValue::TRUE).unwrap();
    js_sys::Reflect::set(&config, &"filterPlaceholder".into(), &"Search".into()).unwrap();

    let picker = CountryPicker::new(config.into()).expect("configured picker");
    assert!(picker.hide_alphabet_rail());
    assert_eq!(picker.filter_placeholder(), "Search");

    let defaults = CountryPicker::new(JsValue::UNDEFINED).expect("default picker");
    assert!(!defaults.hide_alphabet_rail());
}

#[wasm_bindgen_test]
fn unknown_code_throws() {
    let mut picker = CountryPicker::new(JsValue::UNDEFINED).expect("default picker");
    assert!(picker.select("XX").is_err());
}
