//! countrypick-cli
//! ===============
//!
//! Command-line interface for the `countrypick-core` country picker.
//!
//! This crate primarily provides a binary (`countrypick`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Basic usage:
//!
//! ```text
//! countrypick --help
//! countrypick list
//! countrypick filter germny
//! countrypick pick us
//! ```
//!
//! For programmatic access to the selection-list controller, use the
//! [`countrypick-core`] crate directly.

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
