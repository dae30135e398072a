// crates/countrypick-core/src/lib.rs

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod flag;
pub mod layout;
pub mod prelude;
pub mod score;
pub mod text;

// Re-exports
pub use crate::catalog::{Catalog, CountryName, CountryRecord, LanguageInfo};
pub use crate::config::{FilterOptions, ListMode, PickerConfig};
pub use crate::controller::{DisplayRow, Selection, SelectionList};
pub use crate::error::{PickerError, Result};
pub use crate::flag::{emoji_flag, FlagMode};
pub use crate::layout::ListMetrics;
pub use crate::text::{equals_folded, fold_key};
