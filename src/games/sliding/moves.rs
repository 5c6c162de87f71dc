//! Move payload for the sliding tiles engine.

use serde::{Deserialize, Serialize};

/// A request to swap two cells, addressed by row and column.
///
/// The UI builds moves as (touched cell, blank cell); the engine checks
/// that the two sides differ and trusts the caller for blank membership
/// and adjacency. A malformed move is ignored, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideMove {
    pub row1: usize,
    pub col1: usize,
    pub row2: usize,
    pub col2: usize,
}

impl SlideMove {
    /// Create a move swapping `(row1, col1)` with `(row2, col2)`.
    #[must_use]
    pub fn new(row1: usize, col1: usize, row2: usize, col2: usize) -> Self {
        Self {
            row1,
            col1,
            row2,
            col2,
        }
    }

    /// Whether both coordinate pairs address the same cell.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.row1 == self.row2 && self.col1 == self.col2
    }
}
