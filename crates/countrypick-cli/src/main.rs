//! countrypick — Command-line interface for countrypick-core
//!
//! This binary drives the selection-list controller from a terminal. It can
//! print the working list, the alphabet index, fuzzy-filter results, the
//! scroll target for an index letter, and the payload produced by selecting
//! a country.
//!
//! Usage examples
//! --------------
//!
//! - Print the full list
//!   $ countrypick list
//!
//! - Restrict, exclude and disable entries
//!   $ countrypick --only=US,DE,FR --disabled=DE list
//!
//! - Fuzzy filter (typo-tolerant)
//!   $ countrypick filter "Urnited Statez"
//!
//! - Resolve names under a translation
//!   $ countrypick --translation=deu list
//!
//! - Select a country and print the payload as JSON
//!   $ countrypick pick us
//!
//! By default the bundled catalog is used; point `--catalog <path>` at a
//! custom JSON file to load a different dataset.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use countrypick_core::{Catalog, ListMode, PickerConfig, SelectionList};
use std::sync::Arc;

fn parse_codes(raw: &Option<String>) -> Option<Vec<String>> {
    raw.as_ref().map(|s| {
        s.split(',')
            .map(|x| x.trim().to_string())
            .filter(|x| !x.is_empty())
            .collect()
    })
}

fn print_rows(list: &SelectionList) {
    for row in list.rows() {
        let mut line = String::new();
        if let Some(flag) = &row.flag {
            line.push_str(flag);
            line.push(' ');
        }
        line.push_str(&row.name);
        if let Some(code) = &row.calling_code {
            line.push_str(&format!(" +{code}"));
        }
        line.push_str(&format!(" ({})", row.cca2));
        if row.disabled {
            let text = row.disabled_text.as_deref().unwrap_or("disabled");
            line.push_str(&format!(" [{text}]"));
        }
        println!("{line}");
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let catalog = match &args.catalog {
        Some(path) => Arc::new(Catalog::load_from_path(path)?),
        None => Catalog::bundled()?,
    };

    let mut config = PickerConfig::default();
    if let Some(translation) = &args.translation {
        config.translation = translation.clone();
    }
    config.country_list = parse_codes(&args.only);
    if let Some(excluded) = parse_codes(&args.exclude) {
        config.excluded_countries = excluded;
    }
    if let Some(disabled) = parse_codes(&args.disabled) {
        config.disabled_countries = disabled;
    }
    if args.languages {
        config.mode = ListMode::Languages;
    }
    config.hide_flags = args.hide_flags;
    config.show_calling_code = args.calling_codes;

    let mut list = SelectionList::new(catalog, config);

    match args.command {
        Commands::List => print_rows(&list),

        Commands::Letters => {
            let letters: String = list
                .letters()
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("{letters}");
        }

        Commands::Filter { query } => {
            list.set_filter(&query);
            if list.visible().is_empty() {
                println!("No matches for: {query}");
            } else {
                print_rows(&list);
            }
        }

        Commands::Scroll { letter } => match list.scroll_target(letter) {
            Some(ordinal) => println!("{letter} -> row {ordinal}"),
            None => eprintln!("No entry starts with: {letter}"),
        },

        Commands::Pick { code } => match list.select(&code)? {
            Some(selection) => println!("{}", serde_json::to_string_pretty(&selection)?),
            None => eprintln!("{code} is disabled; nothing selected"),
        },
    }

    Ok(())
}
