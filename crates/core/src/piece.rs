//! The falling piece - a positioned, oriented, colored instance of a shape.

use blockfall_types::Color;

use crate::shape::{oriented_cell, Shape};
use crate::view::View;

/// A shape instance under player control.
///
/// The orientation is one of four discrete states, always kept in `0..4`.
/// Producing occupied cells never mutates the piece; the board owns the
/// piece exclusively and validates every move before committing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    x: i32,
    y: i32,
    rotation: u8,
    shape: &'static Shape,
    color: Color,
}

impl Piece {
    /// Create a piece at `(x, y)` in orientation 0.
    ///
    /// The color normally matches the shape's default but is decoupled so a
    /// piece can be recolored.
    pub fn new(x: i32, y: i32, shape: &'static Shape, color: Color) -> Self {
        Self {
            x,
            y,
            rotation: 0,
            shape,
            color,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Orientation index in `0..4`.
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    /// The four absolute cells occupied at the current origin and
    /// orientation.
    ///
    /// Lazy and restartable: every call recomputes the coordinates from the
    /// piece's current state, so the sequence is never stale. Nothing is
    /// cached because origin and orientation may change between calls.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .tiles
            .iter()
            .map(move |&offset| oriented_cell(self.shape, self.rotation, self.x, self.y, offset))
    }

    /// Translate the origin, unconditionally. The board validates first.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Step the orientation by one, unconditionally. The board validates
    /// first.
    pub fn rotate(&mut self, clockwise: bool) {
        self.rotation = if clockwise {
            (self.rotation + 1) % 4
        } else {
            (self.rotation + 3) % 4
        };
    }

    /// A copy advanced one rotation step, leaving `self` untouched.
    ///
    /// Used for trial placement: the board checks the copy's cells without
    /// mutating game state.
    pub fn rotated(&self, clockwise: bool) -> Self {
        let mut piece = *self;
        piece.rotate(clockwise);
        piece
    }

    /// Paint the piece's cells into a view.
    pub fn render(&self, view: &mut impl View) {
        for (x, y) in self.cells() {
            view.render_tile(x, y, self.color);
        }
    }
}
