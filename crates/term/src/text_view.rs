//! Text view: displays a rendered frame as one character per tile.

use std::fmt;

use blockfall_core::View;
use blockfall_types::Color;

use crate::buffer::TileBuffer;

/// Glyph used for each tile color.
pub fn glyph(color: Color) -> char {
    match color {
        Color::Clear => '.',
        Color::Red => '*',
        Color::Blue => '#',
        Color::Green => 'o',
        Color::Yellow => 'O',
        Color::Magenta => '%',
        Color::Cyan => '&',
        Color::Orange => '$',
    }
}

/// A render surface that displays as text, one line per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextView {
    buf: TileBuffer,
}

impl TextView {
    pub fn new(columns: i32, rows: i32) -> Self {
        Self {
            buf: TileBuffer::new(columns, rows),
        }
    }

    pub fn buffer(&self) -> &TileBuffer {
        &self.buf
    }
}

impl Default for TextView {
    /// A zero-size view; the board sizes it on first render.
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl View for TextView {
    fn set_size(&mut self, columns: i32, rows: i32) {
        self.buf.set_size(columns, rows);
    }

    fn clear(&mut self) {
        self.buf.clear();
    }

    fn render_tile(&mut self, x: i32, y: i32, color: Color) {
        self.buf.render_tile(x, y, color);
    }
}

impl fmt::Display for TextView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.buf.height() {
            for x in 0..self.buf.width() {
                write!(f, "{}", glyph(self.buf.get(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
