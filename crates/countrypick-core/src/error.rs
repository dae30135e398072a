// crates/countrypick-core/src/error.rs

use thiserror::Error;

/// Errors produced while loading a catalog or operating the picker.
///
/// Configuration-level problems (unknown codes in candidate, excluded or
/// disabled lists) are *not* errors: they are silently dropped when the
/// working list is built. An unknown code handed to a lookup or select
/// operation, on the other hand, is a programming error on the caller's
/// side and surfaces as [`PickerError::UnknownCode`].
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("catalog not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog contains no entries")]
    EmptyCatalog,

    #[error("duplicate country code in catalog: {0}")]
    DuplicateCode(String),

    #[error("unknown country code: {0}")]
    UnknownCode(String),
}

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PickerError>;
