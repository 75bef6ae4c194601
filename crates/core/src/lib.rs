//! Simulation core - pure, deterministic, and testable
//!
//! This crate contains all the game rules and grid state management for the
//! falling-block simulation. It has **zero dependencies** on UI, networking,
//! or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is exercised by unit and integration tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: the grid state machine - collision, landing, line clearing,
//!   piece generation, and the per-column height cache
//! - [`piece`]: the falling piece - origin, orientation, occupied cells
//! - [`shape`]: the seven shape templates and the orientation transform
//! - [`rng`]: seedable pseudo-random source for piece generation
//! - [`view`]: the render-surface contract boards push frames into
//!
//! # Example
//!
//! ```
//! use blockfall_core::Board;
//!
//! let mut board = Board::new(10, 20).with_seed(7);
//! board.generate_piece();
//!
//! board.move_piece(-1, 0);
//! board.rotate_piece(true);
//! board.drop_piece();
//!
//! assert!(board.piece().is_some());
//! ```
//!
//! Every operation runs to completion before returning; there is no
//! locking, no blocking, and no I/O anywhere in this crate. Illegal moves
//! and rotations are silent no-ops, never errors.

pub mod board;
pub mod piece;
pub mod rng;
pub mod shape;
pub mod view;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use shape::{oriented_cell, Shape, ShapeKind};
pub use view::View;
