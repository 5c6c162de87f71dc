//! Puzzle engine trait implemented by each game.
//!
//! An engine defines:
//! - what a move is and when it is well-formed
//! - how a move mutates the session
//! - when the session is over and what it scored
//!
//! Mutations report an explicit [`MoveOutcome`] instead of broadcasting to
//! observers: `Applied` tells the caller to re-read state and re-render,
//! `Ignored` tells it nothing changed. Errors are reserved for malformed
//! input (see [`GameError`]); an illegal move against a healthy session is
//! `Ignored`, never `Err`.

use crate::core::Score;
use crate::error::GameError;

/// What a mutating call did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// State changed; the caller should re-read and re-render.
    Applied,
    /// Illegal or redundant action; nothing changed.
    Ignored,
}

impl MoveOutcome {
    /// Whether the session state changed.
    #[must_use]
    pub fn changed(self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }
}

/// Result of a finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
}

/// A single-player puzzle session with discrete moves.
///
/// ## Implementation Notes
///
/// - `apply_move` must be atomic: fully applied or fully rejected.
/// - `outcome` returning `Some` is the terminal predicate; engines ignore
///   further moves once terminal.
/// - `final_score` is `Some` only at a scorable terminal state.
pub trait PuzzleEngine {
    /// Game-specific move payload.
    type Move;

    /// Whether the move is well-formed for the current session.
    fn is_valid_move(&self, mv: &Self::Move) -> bool;

    /// Validate and apply a move.
    fn apply_move(&mut self, mv: &Self::Move) -> Result<MoveOutcome, GameError>;

    /// `Some` once the session can no longer accept moves.
    fn outcome(&self) -> Option<GameResult>;

    /// The score to hand to the leaderboard, once there is one.
    fn final_score(&self) -> Option<Score>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_outcome_changed() {
        assert!(MoveOutcome::Applied.changed());
        assert!(!MoveOutcome::Ignored.changed());
    }
}
