//! Fuzzy filtering example for countrypick-rs
//!
//! This example demonstrates the typo-tolerant filter:
//! - exact, prefix and substring matches
//! - misspelled queries
//! - accent-insensitive matching
//! - filtering under a non-default translation

use countrypick_rs::prelude::*;
use std::sync::Arc;

fn show(list: &SelectionList, label: &str) {
    let names: Vec<&str> = list
        .visible()
        .iter()
        .take(5)
        .filter_map(|code| list.catalog().find(code))
        .map(|record| record.display_name("eng"))
        .collect();
    println!("  {label:<20} -> {names:?}");
}

fn main() -> Result<()> {
    println!("=== CountryPick Fuzzy Filtering Example ===\n");

    let catalog = Catalog::bundled()?;
    let mut list = SelectionList::new(Arc::clone(&catalog), PickerConfig::default());

    // Example 1: Exact, prefix and substring queries
    println!("--- Example 1: Plain queries ---");
    for query in ["Germany", "Ger", "land"] {
        list.set_filter(query);
        show(&list, query);
    }
    println!();

    // Example 2: Misspelled queries still match
    println!("--- Example 2: Typo tolerance ---");
    for query in ["Germny", "Urnited Statez", "Swtzerland"] {
        list.set_filter(query);
        show(&list, query);
    }
    println!();

    // Example 3: Accent-insensitive matching
    println!("--- Example 3: Accent folding ---");
    for query in ["cote", "sao tome"] {
        list.set_filter(query);
        show(&list, query);
    }
    println!();

    // Example 4: Filtering against translated names
    println!("--- Example 4: German translation ---");
    list.set_translation("deu");
    for query in ["Deutschland", "Frankrich"] {
        list.set_filter(query);
        let names: Vec<&str> = list
            .visible()
            .iter()
            .take(3)
            .filter_map(|code| list.catalog().find(code))
            .map(|record| record.display_name("deu"))
            .collect();
        println!("  {query:<20} -> {names:?}");
    }
    println!();

    // Example 5: Clearing the filter restores the full list
    println!("--- Example 5: Reset ---");
    list.set_filter("");
    println!("  visible after reset: {} entries", list.visible().len());

    Ok(())
}
