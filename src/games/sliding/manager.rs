//! Session management for sliding tiles: dealing, legality, win check.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::board::Board;
use super::moves::SlideMove;
use crate::core::{GameKind, GameRng, Score, Tile};
use crate::error::GameError;
use crate::rules::{GameResult, MoveOutcome, PuzzleEngine};

/// Configuration for a new sliding tiles session.
///
/// ```
/// use puzzle_core::games::sliding::SlidingTilesBuilder;
///
/// let game = SlidingTilesBuilder::new()
///     .size(4)
///     .max_undo_moves(3)
///     .seed(42)
///     .build();
/// assert_eq!(game.board().moves_made(), 0);
/// ```
pub struct SlidingTilesBuilder {
    size: usize,
    max_undo_moves: usize,
    image: Option<Vec<u8>>,
    seed: Option<u64>,
}

impl Default for SlidingTilesBuilder {
    fn default() -> Self {
        Self {
            size: 4,
            max_undo_moves: 3,
            image: None,
            seed: None,
        }
    }
}

impl SlidingTilesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid size (rows and columns). Must be at least 2.
    pub fn size(mut self, size: usize) -> Self {
        assert!(size >= 2, "board size must be at least 2");
        self.size = size;
        self
    }

    /// How many of the newest moves stay undoable.
    pub fn max_undo_moves(mut self, max: usize) -> Self {
        self.max_undo_moves = max;
        self
    }

    /// Opaque image for image-tile boards. Stored, never interpreted.
    pub fn image(mut self, image: Vec<u8>) -> Self {
        self.image = Some(image);
        self
    }

    /// Fix the deal. Unseeded builds draw a seed from the OS.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Deal a shuffled, solvable board and wrap it in a session.
    #[must_use]
    pub fn build(self) -> SlidingTiles {
        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let tiles = generate_tiles(self.size, &mut rng);
        debug!(size = self.size, seed = rng.seed(), "dealt board");
        let board = match self.image {
            Some(image) => Board::with_image(self.size, tiles, self.max_undo_moves, image),
            None => Board::new(self.size, tiles, self.max_undo_moves),
        };
        SlidingTiles { board }
    }
}

/// Deal the tile sequence for an `n`-sized board.
///
/// Builds tiles `0..n²` in order, marks the last as blank, relocates the
/// tile at `n²-2` to the end, shuffles, then corrects parity so the deal
/// is solvable.
fn generate_tiles(size: usize, rng: &mut GameRng) -> Vec<Tile> {
    let num_tiles = size * size;
    let mut tiles: Vec<Tile> = (0..num_tiles as u32).map(Tile::numbered).collect();

    tiles[num_tiles - 1].set_blank();
    let relocated = tiles.remove(num_tiles - 2);
    tiles.push(relocated);

    rng.shuffle(&mut tiles);
    make_solvable(size, &mut tiles);
    tiles
}

/// Fix the deal's parity so the classic 15-puzzle invariant holds:
/// `(inversions + blank row distance) % 2 == 0`.
///
/// An odd sum is corrected by one transposition. The usual cells are the
/// last and third-from-last; when the blank sits on one of those, the two
/// highest-indexed non-blank cells are transposed instead, which flips the
/// inversion count without moving the blank.
fn make_solvable(size: usize, tiles: &mut [Tile]) {
    if (inversions(tiles) + blank_row_distance(size, tiles)) % 2 == 0 {
        return;
    }
    let last = tiles.len() - 1;
    let third = tiles.len() - 3;
    if tiles[last].is_blank() || tiles[third].is_blank() {
        let mut rest = (0..tiles.len()).rev().filter(|&i| !tiles[i].is_blank());
        if let (Some(a), Some(b)) = (rest.next(), rest.next()) {
            tiles.swap(a, b);
        }
    } else {
        tiles.swap(last, third);
    }
    debug!(size, "deal parity corrected");
}

/// Inversion count over all pairs excluding the blank sentinel.
fn inversions(tiles: &[Tile]) -> usize {
    let blank_id = (tiles.len() - 1) as u32;
    let mut inv = 0;
    for i in 0..tiles.len() {
        for j in (i + 1)..tiles.len() {
            if tiles[j].id() < tiles[i].id()
                && tiles[j].id() != blank_id
                && tiles[i].id() != blank_id
            {
                inv += 1;
            }
        }
    }
    inv
}

/// Number of rows below the blank's current row.
fn blank_row_distance(size: usize, tiles: &[Tile]) -> usize {
    tiles
        .iter()
        .position(|t| t.is_blank())
        .map_or(0, |i| size - 1 - i / size)
}

/// One sliding tiles session: a board plus the game rules over it.
///
/// The session is the board's sole mutator. Moves arrive from the UI as
/// [`SlideMove`]s; illegal or redundant ones are ignored, and once the
/// puzzle is solved every further touch is ignored too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidingTiles {
    board: Board,
}

impl SlidingTiles {
    /// Wrap a pre-populated board: a restored session or a test fixture.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    /// Read access to the board for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether the move addresses two distinct cells.
    ///
    /// Blank membership and adjacency are the move constructor's side of
    /// the contract; a tap resolving to a single cell is what gets
    /// rejected here.
    #[must_use]
    pub fn is_valid_move(&self, mv: &SlideMove) -> bool {
        !mv.is_degenerate()
    }

    /// Apply a touch as a move.
    ///
    /// Ignored on a solved board and for degenerate or out-of-range
    /// moves; never an error.
    pub fn touch_move(&mut self, mv: &SlideMove) -> MoveOutcome {
        if self.puzzle_solved() || !self.is_valid_move(mv) {
            return MoveOutcome::Ignored;
        }
        if self.board.make_move(mv) {
            MoveOutcome::Applied
        } else {
            MoveOutcome::Ignored
        }
    }

    /// Take back the most recent move, if the undo allowance permits.
    pub fn undo_last_move(&mut self) -> bool {
        self.board.undo_last_move()
    }

    /// Whether the tiles sit in row-major target order with the blank
    /// last.
    ///
    /// Tiles order by target position descending, so the solved board is
    /// the strictly decreasing run; a single transposition anywhere
    /// breaks it.
    #[must_use]
    pub fn puzzle_solved(&self) -> bool {
        let mut last: Option<&Tile> = None;
        for tile in self.board.iter() {
            if let Some(prev) = last {
                if prev <= tile {
                    return false;
                }
            }
            last = Some(tile);
        }
        true
    }

    /// The swaps of the blank with each edge-adjacent neighbour.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[SlideMove; 4]> {
        let mut moves = SmallVec::new();
        let Some(blank_index) = self.board.iter().position(|t| t.is_blank()) else {
            return moves;
        };
        let cols = self.board.cols();
        let (row, col) = (blank_index / cols, blank_index % cols);
        if row > 0 {
            moves.push(SlideMove::new(row - 1, col, row, col));
        }
        if row + 1 < self.board.rows() {
            moves.push(SlideMove::new(row + 1, col, row, col));
        }
        if col > 0 {
            moves.push(SlideMove::new(row, col - 1, row, col));
        }
        if col + 1 < cols {
            moves.push(SlideMove::new(row, col + 1, row, col));
        }
        moves
    }
}

impl PuzzleEngine for SlidingTiles {
    type Move = SlideMove;

    fn is_valid_move(&self, mv: &SlideMove) -> bool {
        SlidingTiles::is_valid_move(self, mv)
    }

    fn apply_move(&mut self, mv: &SlideMove) -> Result<MoveOutcome, GameError> {
        Ok(self.touch_move(mv))
    }

    fn outcome(&self) -> Option<GameResult> {
        self.puzzle_solved().then_some(GameResult::Won)
    }

    fn final_score(&self) -> Option<Score> {
        self.puzzle_solved()
            .then(|| Score::new(self.board.moves_made() as i32, GameKind::SlidingTiles))
    }
}
