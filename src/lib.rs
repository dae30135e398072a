//! countrypick-rs — workspace facade over `countrypick-core`.
//!
//! Re-exports the core picker API so demos and quick experiments can depend
//! on the workspace root crate directly. Hosts should depend on
//! `countrypick-core` (and `countrypick-wasm` for browsers).

pub use countrypick_core::*;

pub mod prelude {
    pub use countrypick_core::prelude::*;
}
