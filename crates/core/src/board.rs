//! Board module - the grid state machine.
//!
//! The board owns the tile grid, a per-column height cache, the falling
//! piece, and the piece generator. Coordinates are (x, y) with x growing
//! rightward and y growing downward; row 0 is the top of the well.
//!
//! The height cache is the one piece of denormalized state: `top_height[c]`
//! always holds the row index of the topmost occupied cell in column c, or
//! the board height when the column is empty. Every tile write and every
//! row clear maintains it in place, which keeps per-cell collision checks
//! O(1) and row compaction proportional to the stack height rather than the
//! grid.

use arrayvec::ArrayVec;
use blockfall_types::Color;

use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::shape::ShapeKind;
use crate::view::View;

/// Seed for boards constructed without an explicit one.
const DEFAULT_SEED: u32 = 1;

/// The game board: a W x H tile grid plus at most one falling piece.
#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    /// Flat array of tiles, row-major order (y * width + x).
    tiles: Vec<Color>,
    /// Topmost occupied row per column; `height` means the column is empty.
    top_height: Vec<i32>,
    /// The falling piece, exclusively owned. `None` between finalize and
    /// the next spawn.
    piece: Option<Piece>,
    rng: SimpleRng,
    /// Whether `drop_piece` spawns the next piece after finalizing.
    autogen: bool,
    game_over: bool,
}

impl Board {
    /// Create an empty board with no falling piece.
    ///
    /// Panics if either dimension is not positive.
    pub fn new(columns: i32, rows: i32) -> Self {
        assert!(columns > 0 && rows > 0, "board dimensions must be positive");
        Self {
            width: columns,
            height: rows,
            tiles: vec![Color::Clear; (columns as usize) * (rows as usize)],
            top_height: vec![rows; columns as usize],
            piece: None,
            rng: SimpleRng::new(DEFAULT_SEED),
            autogen: true,
            game_over: false,
        }
    }

    /// Seed the piece generator. Same seed, same piece sequence.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.rng = SimpleRng::new(seed);
        self
    }

    /// Control whether `drop_piece` auto-spawns after finalizing a landed
    /// piece. Test harnesses turn this off to inspect post-finalize state
    /// before spawning manually.
    pub fn with_autogen(mut self, autogen: bool) -> Self {
        self.autogen = autogen;
        self
    }

    /// Pre-populate landed tiles, keeping the height cache consistent.
    pub fn with_tiles(mut self, tiles: &[(i32, i32, Color)]) -> Self {
        for &(x, y, color) in tiles {
            self.set_tile(x, y, color);
        }
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The falling piece, if one is present.
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    /// Install `piece` as the falling piece, replacing any existing one.
    /// Intended for drivers and tests that stage a specific scenario.
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = Some(piece);
    }

    /// The per-column height cache; `height()` means the column is empty.
    pub fn top_heights(&self) -> &[i32] {
        &self.top_height
    }

    /// True once a freshly generated piece was already blocked at spawn.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Tile color at (x, y). Out-of-range reads are `Clear`.
    pub fn tile(&self, x: i32, y: i32) -> Color {
        match self.index(x, y) {
            Some(idx) => self.tiles[idx],
            None => Color::Clear,
        }
    }

    /// Write a landed tile and maintain the height cache.
    ///
    /// This is the single mutation point for occupying a cell; the cache
    /// update here is what keeps `top_height` authoritative. Writing the
    /// `Clear` sentinel is a precondition failure - it would corrupt the
    /// cache invariant. Out-of-range writes are ignored, so persisted tiles
    /// always stay inside the grid.
    pub fn set_tile(&mut self, x: i32, y: i32, color: Color) {
        assert!(!color.is_clear(), "landed tiles must carry a fill color");
        if let Some(idx) = self.index(x, y) {
            self.tiles[idx] = color;
            let col = x as usize;
            if self.top_height[col] > y {
                self.top_height[col] = y;
            }
        }
    }

    /// Clear one cell and compact its column.
    ///
    /// Every cell above (x, y) slides down one row, overwriting downward;
    /// the cached top then advances past the emptied row and any rows that
    /// were already empty above the old stack top, in one pass.
    pub fn clear_tile(&mut self, x: i32, y: i32) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        self.tiles[idx] = Color::Clear;

        // Slide the column contents above this row down one space. Reads
        // above row 0 come back Clear.
        let top = self.top_height[x as usize];
        for yt in (top..=y).rev() {
            let above = self.tile(x, yt - 1);
            let i = (yt as usize) * (self.width as usize) + (x as usize);
            self.tiles[i] = above;
        }

        // Advance the cached top past whatever is now empty.
        let col = x as usize;
        while self.top_height[col] < self.height && self.tile(x, self.top_height[col]).is_clear() {
            self.top_height[col] += 1;
        }
    }

    /// True iff every column has a landed tile at `row`.
    pub fn row_full(&self, row: i32) -> bool {
        (0..self.width).all(|col| !self.tile(col, row).is_clear())
    }

    /// Clear every cell in `row`, compacting each column independently, in
    /// ascending column order.
    pub fn clear_row(&mut self, row: i32) {
        for col in 0..self.width {
            self.clear_tile(col, row);
        }
    }

    /// Clear every full row, scanning rows in ascending order, and return
    /// the cleared row indices.
    ///
    /// The scan runs one row past the bottom of the grid; that row reads as
    /// all-Clear and can never be full. A landed piece completes at most
    /// four rows.
    pub fn clear_full_rows(&mut self) -> ArrayVec<i32, 4> {
        let mut cleared = ArrayVec::new();
        for row in 0..=self.height {
            if self.row_full(row) {
                self.clear_row(row);
                cleared.push(row);
            }
        }
        cleared
    }

    /// Whether the falling piece could occupy the cell (x, y).
    ///
    /// Open cells are inside the side walls and strictly above the landed
    /// stack in their column. There is no lower bound on y: a piece may
    /// hang partly above the top of the well.
    fn cell_open(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y < self.top_height[x as usize]
    }

    fn piece_fits(&self, piece: &Piece) -> bool {
        piece.cells().all(|(x, y)| self.cell_open(x, y))
    }

    /// True if the falling piece could move by (dx, dy). No piece, no move.
    pub fn can_move(&self, dx: i32, dy: i32) -> bool {
        match &self.piece {
            Some(piece) => piece.cells().all(|(x, y)| self.cell_open(x + dx, y + dy)),
            None => false,
        }
    }

    /// Move the falling piece by (dx, dy) if every target cell is open.
    /// Illegal moves are silently rejected, not errors.
    pub fn move_piece(&mut self, dx: i32, dy: i32) {
        if self.can_move(dx, dy) {
            if let Some(piece) = self.piece.as_mut() {
                piece.translate(dx, dy);
            }
        }
    }

    /// True if the falling piece could advance one rotation step in place.
    ///
    /// Rotation trials the same per-cell check as movement, against the
    /// current origin; it does not also re-check translation.
    pub fn can_rotate(&self, clockwise: bool) -> bool {
        match &self.piece {
            Some(piece) => self.piece_fits(&piece.rotated(clockwise)),
            None => false,
        }
    }

    /// Rotate the falling piece if the rotated cells are all open.
    pub fn rotate_piece(&mut self, clockwise: bool) {
        if self.can_rotate(clockwise) {
            if let Some(piece) = self.piece.as_mut() {
                piece.rotate(clockwise);
            }
        }
    }

    /// Single gravity tick: move the piece down one row, or land it.
    ///
    /// When the piece lands it is finalized, and the next piece spawns only
    /// if autogen is on. No piece, no-op.
    pub fn drop_piece(&mut self) {
        if self.piece.is_none() {
            return;
        }
        if self.can_move(0, 1) {
            if let Some(piece) = self.piece.as_mut() {
                piece.translate(0, 1);
            }
        } else {
            self.finalize_piece();
            if self.autogen {
                self.generate_piece();
            }
        }
    }

    /// Hard drop: slide the piece down as far as it goes, finalize it, and
    /// spawn the next piece regardless of the autogen flag. No piece,
    /// no-op.
    pub fn full_drop_piece(&mut self) {
        if self.piece.is_none() {
            return;
        }
        while self.can_move(0, 1) {
            if let Some(piece) = self.piece.as_mut() {
                piece.translate(0, 1);
            }
        }
        self.finalize_piece();
        self.generate_piece();
    }

    /// Write the landed piece into the grid, clear any full rows, and
    /// release the piece.
    pub fn finalize_piece(&mut self) {
        let Some(piece) = self.piece.take() else {
            return;
        };
        for (x, y) in piece.cells() {
            self.set_tile(x, y, piece.color());
        }
        self.clear_full_rows();
    }

    /// Spawn a new random piece at the top of the board.
    ///
    /// The shape is a uniform pick of the seven kinds; the spawn column
    /// centers the shape using its rotation adjustment. Any existing piece
    /// reference is overwritten, so callers finalize first. If the fresh
    /// piece is already blocked, the game-over flag is raised; the piece is
    /// still installed so a final frame can render it.
    pub fn generate_piece(&mut self) {
        let kind = ShapeKind::ALL[self.rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let shape = kind.shape();
        let piece = Piece::new(self.width / 2 - shape.x_adj, 0, shape, shape.color);
        if !self.piece_fits(&piece) {
            self.game_over = true;
        }
        self.piece = Some(piece);
    }

    /// Render the whole board into a view: landed tiles first, then the
    /// falling piece's cells on top.
    pub fn render(&self, view: &mut impl View) {
        view.clear();
        view.set_size(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let color = self.tile(x, y);
                if !color.is_clear() {
                    view.render_tile(x, y, color);
                }
            }
        }
        if let Some(piece) = &self.piece {
            piece.render(view);
        }
    }
}
