use clap::{Parser, Subcommand};

/// CLI arguments for countrypick-cli
#[derive(Debug, Parser)]
#[command(
    name = "countrypick",
    version,
    about = "CLI for exercising the countrypick-core selection list"
)]
pub struct CliArgs {
    /// Path to a catalog JSON file (default: the bundled catalog)
    #[arg(short = 'c', long = "catalog", global = true)]
    pub catalog: Option<String>,

    /// Translation key used to resolve display names (e.g. deu, fra)
    #[arg(short = 't', long = "translation", global = true)]
    pub translation: Option<String>,

    /// Comma-separated ISO2 codes to restrict the list to (e.g. DE,CH,AT)
    #[arg(long = "only", global = true)]
    pub only: Option<String>,

    /// Comma-separated ISO2 codes to exclude from the list
    #[arg(long = "exclude", global = true)]
    pub exclude: Option<String>,

    /// Comma-separated ISO2 codes rendered as disabled
    #[arg(long = "disabled", global = true)]
    pub disabled: Option<String>,

    /// List spoken languages instead of country names
    #[arg(long = "languages", global = true)]
    pub languages: bool,

    /// Omit flags from the output rows
    #[arg(long = "hide-flags", global = true)]
    pub hide_flags: bool,

    /// Show calling codes next to each entry
    #[arg(long = "calling-codes", global = true)]
    pub calling_codes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the working list in display order
    List,

    /// Print the alphabet index derived from the working list
    Letters,

    /// Filter the list with a fuzzy query and print the matches
    Filter {
        /// Query text (typo-tolerant, accent-insensitive)
        query: String,
    },

    /// Show the row ordinal the list would scroll to for an index letter
    Scroll {
        /// Index letter (case-insensitive)
        letter: char,
    },

    /// Select a country by ISO2 code and print the selection payload
    Pick {
        /// ISO2 code (e.g. DE, us)
        code: String,
    },
}
