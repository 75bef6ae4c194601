//! Tile buffer: a plain color grid implementing the render contract.

use blockfall_core::View;
use blockfall_types::Color;

/// 2D grid of tile colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBuffer {
    width: i32,
    height: i32,
    tiles: Vec<Color>,
}

impl TileBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![Color::Clear; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Tile at (x, y); out-of-range reads are `Clear`.
    pub fn get(&self, x: i32, y: i32) -> Color {
        self.idx(x, y).map_or(Color::Clear, |i| self.tiles[i])
    }

    pub fn tiles(&self) -> &[Color] {
        &self.tiles
    }
}

impl View for TileBuffer {
    fn set_size(&mut self, columns: i32, rows: i32) {
        self.width = columns.max(0);
        self.height = rows.max(0);
        let len = (self.width as usize) * (self.height as usize);
        // Reuses the allocation across same-size frames.
        self.tiles.resize(len, Color::Clear);
        self.tiles.fill(Color::Clear);
    }

    fn clear(&mut self) {
        self.tiles.fill(Color::Clear);
    }

    fn render_tile(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.idx(x, y) {
            self.tiles[i] = color;
        }
    }
}
