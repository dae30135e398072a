//! End-to-end controller flow against the bundled catalog.

use countrypick_core::{Catalog, PickerConfig, SelectionList};

fn bundled_picker(config: PickerConfig) -> SelectionList {
    SelectionList::new(Catalog::bundled().unwrap(), config)
}

#[test]
fn working_list_is_sorted_and_complete() {
    let list = bundled_picker(PickerConfig::default());
    let catalog = Catalog::bundled().unwrap();
    assert_eq!(list.working().len(), catalog.len());

    let names: Vec<&str> = list
        .working()
        .iter()
        .map(|code| catalog.find(code).unwrap().display_name("eng"))
        .collect();
    assert!(names.windows(2).all(|w| w[0] <= w[1]), "names not sorted");
}

#[test]
fn alphabet_index_matches_first_letters() {
    let list = bundled_picker(PickerConfig::default());
    let catalog = Catalog::bundled().unwrap();

    let letters = list.letters();
    assert!(!letters.is_empty());
    assert!(letters.len() <= list.working().len());
    assert!(letters.windows(2).all(|w| w[0] < w[1]), "index not ascending");

    for &letter in letters {
        let ordinal = list.scroll_target(letter).expect("letter has an entry");
        let code = &list.working()[ordinal];
        let name = catalog.find(code).unwrap().display_name("eng");
        let first = name.chars().next().unwrap().to_uppercase().next().unwrap();
        assert_eq!(first, letter);
    }
}

#[test]
fn restricted_list_flow() {
    let config = PickerConfig {
        country_list: Some(vec!["FR".into(), "US".into(), "DE".into()]),
        ..PickerConfig::default()
    };
    let mut list = bundled_picker(config);

    assert_eq!(list.working(), ["FR", "DE", "US"]);
    assert_eq!(list.letters(), ['F', 'G', 'U']);
    assert_eq!(list.scroll_target('U'), Some(2));
    assert_eq!(list.scroll_target('Z'), None);

    let top = list.set_filter("Urnited Statez").first().cloned();
    assert_eq!(top.as_deref(), Some("US"));
}

#[test]
fn exclusion_holds_under_any_filter() {
    let config = PickerConfig {
        country_list: Some(vec!["FR".into(), "US".into(), "DE".into()]),
        excluded_countries: vec!["DE".into()],
        ..PickerConfig::default()
    };
    let mut list = bundled_picker(config);
    assert_eq!(list.working(), ["FR", "US"]);

    for query in ["", "Germany", "DE", "Ger"] {
        let visible = list.set_filter(query).to_vec();
        assert!(!visible.iter().any(|c| c == "DE"), "DE leaked for {query:?}");
    }
}

#[test]
fn selection_resolves_catalog_details() {
    let mut list = bundled_picker(PickerConfig::default());
    let selection = list.select("US").unwrap().expect("US is selectable");
    assert_eq!(selection.cca2, "US");
    assert_eq!(selection.name, "United States");
    assert_eq!(selection.calling_code.as_deref(), Some("1"));
    assert_eq!(selection.flag.as_deref(), Some("🇺🇸"));
}
