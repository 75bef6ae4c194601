//! Blockfall (workspace facade crate).
//!
//! This package keeps the `blockfall::{core,term,types}` public API in one
//! place while the implementation lives in dedicated crates under `crates/`.

pub use blockfall_core as core;
pub use blockfall_term as term;
pub use blockfall_types as types;
