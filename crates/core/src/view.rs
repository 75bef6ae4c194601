//! Render-surface contract.
//!
//! The board pushes finished frames into a [`View`]; everything past this
//! trait (terminal cells, pixels, text) lives outside the core.

use blockfall_types::Color;

/// An abstract sink for rendered frames.
///
/// Implementations are grids of colors sized by the board at render time.
/// Out-of-range `render_tile` calls are ignored rather than treated as
/// errors, so callers never need to pre-clip.
pub trait View {
    /// Reinitialize to a `columns` x `rows` grid with every cell `Clear`.
    fn set_size(&mut self, columns: i32, rows: i32);

    /// Reset every cell to `Clear` without resizing.
    fn clear(&mut self);

    /// Set a single cell. Out-of-range coordinates are silently ignored.
    fn render_tile(&mut self, x: i32, y: i32, color: Color);
}
