//! Basic usage example for countrypick-rs
//!
//! This example demonstrates how to:
//! - Load the bundled country catalog
//! - Build a selection list with a configuration
//! - Read the working list, rows and alphabet index
//! - Select a country and receive the payload

use countrypick_rs::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== CountryPick Basic Usage Example ===\n");

    // Load the bundled catalog
    println!("Loading country catalog...");
    let catalog = Catalog::bundled()?;
    println!("✓ Catalog loaded: {} countries\n", catalog.len());

    // Example 1: Default picker over the whole catalog
    println!("--- Example 1: Default picker ---");
    let list = SelectionList::new(Arc::clone(&catalog), PickerConfig::default());
    println!("Entries: {}", list.working().len());
    for row in list.rows().iter().take(5) {
        let flag = row.flag.as_deref().unwrap_or(" ");
        println!("  {} {} ({})", flag, row.name, row.cca2);
    }
    println!("... and {} more\n", list.working().len() - 5);

    // Example 2: Restrict, exclude and disable entries
    println!("--- Example 2: Configured picker ---");
    let config = PickerConfig {
        country_list: Some(vec!["US".into(), "DE".into(), "FR".into(), "GB".into()]),
        disabled_countries: vec!["DE".into()],
        disabled_country_text: Some("Coming soon".into()),
        show_calling_code: true,
        ..PickerConfig::default()
    };
    let mut list = SelectionList::new(Arc::clone(&catalog), config);
    for row in list.rows() {
        let code = row.calling_code.map(|c| format!(" +{c}")).unwrap_or_default();
        let note = row.disabled_text.map(|t| format!(" [{t}]")).unwrap_or_default();
        println!("  {}{}{}", row.name, code, note);
    }
    println!();

    // Example 3: The alphabet index
    println!("--- Example 3: Alphabet index ---");
    let letters: Vec<String> = list.letters().iter().map(|l| l.to_string()).collect();
    println!("  {}", letters.join(" "));
    if let Some(ordinal) = list.scroll_target('U') {
        println!("  'U' scrolls to row {ordinal}");
    }
    println!();

    // Example 4: Select a country
    println!("--- Example 4: Selection ---");
    list.set_on_change(|selection| {
        println!("  callback fired for {}", selection.cca2);
    });
    if let Some(selection) = list.select("us")? {
        println!("  Selected: {} ({})", selection.name, selection.cca2);
        println!("  Calling code: {:?}", selection.calling_code);
        println!("  Currency: {:?}", selection.currency);
        println!("  Flag: {:?}", selection.flag);
    }

    Ok(())
}
