//! Error handling example for countrypick-rs
//!
//! This example demonstrates the picker error taxonomy and edge cases

use countrypick_rs::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== CountryPick Error Handling Example ===\n");

    // Example 1: Catalog load errors
    println!("--- Example 1: Loading a catalog with error handling ---");
    match Catalog::load_from_path("no/such/file.json") {
        Ok(catalog) => println!("✓ Loaded {} countries", catalog.len()),
        Err(PickerError::NotFound(path)) => println!("  Catalog not found: {path}"),
        Err(e) => println!("  Load failed: {e}"),
    }
    println!();

    // Example 2: Invalid catalog contents
    println!("--- Example 2: Validation errors ---");
    match Catalog::from_json_str("[]") {
        Ok(_) => println!("  unexpected: empty catalog accepted"),
        Err(e) => println!("  Empty catalog rejected: {e}"),
    }
    let duplicated = r#"[
        {"cca2":"DE","name":{"common":"Germany"}},
        {"cca2":"de","name":{"common":"Germany again"}}
    ]"#;
    match Catalog::from_json_str(duplicated) {
        Ok(_) => println!("  unexpected: duplicate codes accepted"),
        Err(e) => println!("  Duplicate code rejected: {e}"),
    }
    println!();

    let catalog = Catalog::bundled()?;
    let mut list = SelectionList::new(Arc::clone(&catalog), PickerConfig::default());

    // Example 3: Selecting unknown codes fails fast
    println!("--- Example 3: Unknown selection codes ---");
    for code in ["XX", "", "ABCD"] {
        match list.select(code) {
            Ok(Some(selection)) => println!("  Selected: {}", selection.name),
            Ok(None) => println!("  {code}: disabled, nothing selected"),
            Err(PickerError::UnknownCode(c)) => println!("  Unknown code: {c:?}"),
            Err(e) => println!("  Error: {e}"),
        }
    }
    println!();

    // Example 4: Unknown codes in configuration are dropped silently
    println!("--- Example 4: Lenient configuration ---");
    let config = PickerConfig {
        country_list: Some(vec!["US".into(), "XX".into(), "DE".into()]),
        excluded_countries: vec!["YY".into()],
        ..PickerConfig::default()
    };
    let list = SelectionList::new(Arc::clone(&catalog), config);
    println!("  Working list: {:?}", list.working());

    // Example 5: Disabled selection is a no-op, not an error
    println!("\n--- Example 5: Disabled selection ---");
    let config = PickerConfig {
        disabled_countries: vec!["DE".into()],
        ..PickerConfig::default()
    };
    let mut list = SelectionList::new(catalog, config);
    match list.select("DE")? {
        Some(selection) => println!("  unexpected selection: {}", selection.name),
        None => println!("  DE is disabled; select returned None"),
    }

    Ok(())
}
