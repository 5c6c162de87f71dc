//! The sliding tiles board: cells, move counting, undo history.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::moves::SlideMove;
use crate::core::{Tile, UndoStack};

/// An ordered grid of tiles with bounded undo history.
///
/// The board applies whatever swap it is handed; game legality (blank
/// membership, solved-state lockout) lives in
/// [`SlidingTiles`](super::SlidingTiles). `moves_made` counts every
/// committed action — undos included — and never decreases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vector<Tile>,
    moves_made: u32,
    undo: UndoStack,
    image: Option<Vec<u8>>,
}

impl Board {
    /// Create a board over a pre-populated cell sequence.
    ///
    /// `tiles` must hold exactly `size * size` entries in row-major order.
    #[must_use]
    pub fn new(size: usize, tiles: Vec<Tile>, max_undo_moves: usize) -> Self {
        assert_eq!(tiles.len(), size * size, "cell count must match the grid");
        Self {
            rows: size,
            cols: size,
            cells: tiles.into_iter().collect(),
            moves_made: 0,
            undo: UndoStack::new(max_undo_moves),
            image: None,
        }
    }

    /// Create a board that carries an opaque image for the UI to cut into
    /// tile faces.
    #[must_use]
    pub fn with_image(
        size: usize,
        tiles: Vec<Tile>,
        max_undo_moves: usize,
        image: Vec<u8>,
    ) -> Self {
        let mut board = Self::new(size, tiles, max_undo_moves);
        board.image = Some(image);
        board
    }

    /// Swap the two cells addressed by `mv`.
    ///
    /// Remembers the pre-swap arrangement for undo and counts the move.
    /// Returns `false` with no state change if either address is out of
    /// range.
    pub fn make_move(&mut self, mv: &SlideMove) -> bool {
        let (Some(a), Some(b)) = (
            self.index_of(mv.row1, mv.col1),
            self.index_of(mv.row2, mv.col2),
        ) else {
            return false;
        };
        self.undo.push(self.cells.clone(), self.moves_made);
        self.cells.swap(a, b);
        self.moves_made += 1;
        trace!(
            row1 = mv.row1,
            col1 = mv.col1,
            row2 = mv.row2,
            col2 = mv.col2,
            moves = self.moves_made,
            "swap committed"
        );
        true
    }

    /// Restore the newest remembered arrangement.
    ///
    /// The undo is itself a counted action: `moves_made` goes up, not
    /// down. Returns `false` when no history remains.
    pub fn undo_last_move(&mut self) -> bool {
        let Some(record) = self.undo.pop() else {
            return false;
        };
        self.cells = record.cells;
        self.moves_made += 1;
        trace!(moves = self.moves_made, "move undone");
        true
    }

    /// The tile at `(row, col)`, if in range.
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.index_of(row, col).map(|i| &self.cells[i])
    }

    /// Iterate the cells left-to-right, top-to-bottom. The iterator is
    /// lazy and can be restarted by calling again.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter()
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// How many actions (moves and undos) have been committed.
    #[must_use]
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// How many undos remain available right now.
    #[must_use]
    pub fn undos_remaining(&self) -> usize {
        self.undo.len()
    }

    /// The undo allowance this board was created with.
    #[must_use]
    pub fn max_undo_moves(&self) -> usize {
        self.undo.max_moves()
    }

    /// The opaque image payload, if this is an image-tile board.
    #[must_use]
    pub fn image(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }

    fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }
}
