//! Completed-game scores and leaderboard ordering.
//!
//! A [`Score`] is produced once, at a terminal session state, and handed
//! to the embedding app's leaderboard collaborator. Each game defines its
//! own notion of "better": hangman rewards high values, sliding tiles
//! counts moves so fewer is better. [`GameKind::rank`] is the comparator
//! the leaderboard sorts with.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which engine produced a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    SlidingTiles,
    Hangman,
}

impl GameKind {
    /// Leaderboard ordering for this game, best score first.
    #[must_use]
    pub fn rank(self, a: &Score, b: &Score) -> Ordering {
        match self {
            GameKind::Hangman => b.value.cmp(&a.value),
            GameKind::SlidingTiles => a.value.cmp(&b.value),
        }
    }
}

/// A score produced at a terminal game state. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    value: i32,
    game: GameKind,
}

impl Score {
    /// Create a score for a finished game.
    #[must_use]
    pub fn new(value: i32, game: GameKind) -> Self {
        Self { value, game }
    }

    /// The score value.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The game that produced this score.
    #[must_use]
    pub fn game(&self) -> GameKind {
        self.game
    }
}
