//! Render-surface contract tests.

use blockfall::core::{Board, Piece, ShapeKind, View};
use blockfall::term::{TextView, TileBuffer};
use blockfall::types::Color;

fn rows(lines: &[&str]) -> String {
    let mut s = String::new();
    for line in lines {
        s.push_str(line);
        s.push('\n');
    }
    s
}

#[test]
fn test_set_size_reinitializes_to_clear() {
    let mut view = TextView::new(5, 5);
    view.render_tile(2, 2, Color::Red);
    view.set_size(10, 3);
    assert_eq!(
        view.to_string(),
        rows(&["..........", "..........", ".........."])
    );
}

#[test]
fn test_clear_resets_without_resizing() {
    let mut view = TextView::new(5, 5);
    view.render_tile(1, 0, Color::Blue);
    view.clear();
    assert_eq!(view.buffer().width(), 5);
    assert_eq!(view.buffer().height(), 5);
    assert_eq!(
        view.to_string(),
        rows(&[".....", ".....", ".....", ".....", "....."])
    );
}

#[test]
fn test_render_tile_out_of_range_is_ignored() {
    let mut view = TextView::new(5, 5);
    view.render_tile(-1, 0, Color::Red);
    view.render_tile(0, -1, Color::Red);
    view.render_tile(5, 0, Color::Red);
    view.render_tile(0, 5, Color::Red);
    assert_eq!(
        view.to_string(),
        rows(&[".....", ".....", ".....", ".....", "....."])
    );
}

/// The first four fill colors rendered along the top row of a 5x5 surface.
#[test]
fn test_fill_color_glyph_row() {
    let mut view = TextView::new(5, 5);
    for (i, &color) in Color::FILLED.iter().take(4).enumerate() {
        view.render_tile(i as i32 + 1, 0, color);
    }
    assert_eq!(
        view.to_string(),
        rows(&[".*#oO", ".....", ".....", ".....", "....."])
    );
}

/// `Board::render` sizes the surface itself, so any view works regardless
/// of its previous dimensions.
#[test]
fn test_board_render_sizes_the_surface() {
    let board = Board::new(6, 4);
    let mut view = TextView::new(2, 9);
    board.render(&mut view);
    assert_eq!(view.buffer().width(), 6);
    assert_eq!(view.buffer().height(), 4);
}

/// The falling piece paints after the landed tiles, so it wins any overlap.
#[test]
fn test_falling_piece_overlays_landed_tiles() {
    let mut board = Board::new(4, 4).with_tiles(&[(1, 1, Color::Blue)]);
    // Installed directly on top of the landed tile; collision rules would
    // normally prevent this, but the overlay order is still defined.
    board.set_piece(Piece::new(0, 0, ShapeKind::O.shape(), Color::Red));

    let mut view = TextView::default();
    board.render(&mut view);
    assert_eq!(view.to_string(), rows(&["**..", "**..", "....", "...."]));
    assert_eq!(view.buffer().get(1, 1), Color::Red);
}

#[test]
fn test_tile_buffer_tracks_board_colors() {
    let board = Board::new(3, 2).with_tiles(&[(0, 1, Color::Green), (2, 0, Color::Cyan)]);
    let mut fb = TileBuffer::new(0, 0);
    board.render(&mut fb);
    assert_eq!(fb.get(0, 1), Color::Green);
    assert_eq!(fb.get(2, 0), Color::Cyan);
    assert_eq!(fb.get(1, 1), Color::Clear);
}

/// Re-rendering after board mutations reflects the new state; stale piece
/// cells from the previous frame are gone.
#[test]
fn test_rerender_drops_stale_cells() {
    let mut board = Board::new(4, 5).with_autogen(false);
    board.set_piece(Piece::new(0, 0, ShapeKind::Z.shape(), Color::Red));

    let mut view = TextView::default();
    board.render(&mut view);
    assert_eq!(view.buffer().get(0, 0), Color::Red);

    board.move_piece(1, 0);
    board.render(&mut view);
    assert_eq!(view.buffer().get(0, 0), Color::Clear);
    assert_eq!(view.buffer().get(1, 0), Color::Red);
}
