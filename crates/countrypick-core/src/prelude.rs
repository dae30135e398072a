//! countrypick prelude: bring common types into scope for demos and hosts.

#![allow(unused_imports)]

pub use crate::catalog::{Catalog, CountryName, CountryRecord, LanguageInfo};
pub use crate::config::{FilterOptions, ListMode, PickerConfig};
pub use crate::controller::{DisplayRow, Selection, SelectionList};
pub use crate::error::{PickerError, Result};
pub use crate::flag::{emoji_flag, FlagMode};
pub use crate::layout::ListMetrics;
pub use crate::text::{equals_folded, fold_key};
