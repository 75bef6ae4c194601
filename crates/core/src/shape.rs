//! Shape templates and the orientation transform.
//!
//! Each of the seven shapes is a fixed set of four tile offsets in its own
//! local frame, plus two adjustment constants consumed only by the rotation
//! maps. The four orientation maps are piecewise affine, parameterized per
//! shape by `x_adj`/`y_adj` so every orientation lands on non-negative local
//! coordinates. They are not a generic rotation about a center: the four
//! branches must stay distinct, and applying any map four times returns the
//! original cell set for every shape, O included.

use blockfall_types::Color;

/// Offset of a single tile relative to the shape-local origin.
pub type TileOffset = (i32, i32);

/// An immutable shape template.
///
/// Shapes are stable, shared, and read-only; every piece of a given kind
/// references the same `'static` definition.
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    /// Four tile offsets in the shape-local frame.
    pub tiles: [TileOffset; 4],
    /// Keeps rotated x coordinates non-negative; also fixes the spawn column.
    pub x_adj: i32,
    /// Keeps rotated y coordinates non-negative.
    pub y_adj: i32,
    /// Default fill color for pieces of this shape.
    pub color: Color,
}

/// The seven shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    L,
    J,
    O,
    T,
    S,
    Z,
    I,
}

impl ShapeKind {
    /// All kinds, in the order the generator indexes them.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::I,
    ];

    /// The shared definition for this kind.
    pub fn shape(self) -> &'static Shape {
        match self {
            ShapeKind::L => &L_SHAPE,
            ShapeKind::J => &J_SHAPE,
            ShapeKind::O => &O_SHAPE,
            ShapeKind::T => &T_SHAPE,
            ShapeKind::S => &S_SHAPE,
            ShapeKind::Z => &Z_SHAPE,
            ShapeKind::I => &I_SHAPE,
        }
    }
}

pub static L_SHAPE: Shape = Shape {
    tiles: [(0, 0), (0, 1), (0, 2), (1, 2)],
    x_adj: 1,
    y_adj: 2,
    color: Color::Red,
};

/// Reverse L.
pub static J_SHAPE: Shape = Shape {
    tiles: [(0, 0), (1, 0), (0, 1), (0, 2)],
    x_adj: 1,
    y_adj: 2,
    color: Color::Orange,
};

pub static O_SHAPE: Shape = Shape {
    tiles: [(0, 0), (0, 1), (1, 0), (1, 1)],
    x_adj: 1,
    y_adj: 1,
    color: Color::Cyan,
};

pub static T_SHAPE: Shape = Shape {
    tiles: [(0, 0), (1, 0), (1, 1), (2, 0)],
    x_adj: 2,
    y_adj: 1,
    color: Color::Magenta,
};

pub static S_SHAPE: Shape = Shape {
    tiles: [(0, 0), (0, 1), (1, 1), (1, 2)],
    x_adj: 1,
    y_adj: 2,
    color: Color::Blue,
};

pub static Z_SHAPE: Shape = Shape {
    tiles: [(0, 0), (1, 0), (1, 1), (2, 1)],
    x_adj: 2,
    y_adj: 1,
    color: Color::Green,
};

pub static I_SHAPE: Shape = Shape {
    tiles: [(0, 0), (1, 0), (2, 0), (3, 0)],
    x_adj: 3,
    y_adj: 0,
    color: Color::Yellow,
};

/// Map one shape-local tile offset to an absolute board cell.
///
/// `rotation` selects one of the four orientation maps; the piece origin is
/// `(x, y)`. This is a pure function of its arguments - no state, nothing
/// cached.
pub fn oriented_cell(shape: &Shape, rotation: u8, x: i32, y: i32, offset: TileOffset) -> (i32, i32) {
    let (ox, oy) = offset;
    match rotation % 4 {
        0 => (x + ox, y + oy),
        1 => (x - oy + shape.y_adj, y + ox),
        2 => (x - ox + shape.x_adj, y - oy + shape.y_adj),
        _ => (x + oy, y - ox + shape.x_adj),
    }
}
