//! Grid-backed render surfaces.
//!
//! Concrete sinks for the core's render contract. Everything here is pure
//! (no terminal or file I/O) so frames can be asserted on in tests:
//!
//! - [`TileBuffer`]: a plain color grid, the reusable building block
//! - [`TextView`]: a buffer that displays as text, one glyph per tile

pub mod buffer;
pub mod text_view;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use buffer::TileBuffer;
pub use text_view::{glyph, TextView};
