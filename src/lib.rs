//! # puzzle-core
//!
//! Rule engines for a multi-game puzzle arcade.
//!
//! ## Design Principles
//!
//! 1. **Engine, not app**: move validation, win detection, scoring, and
//!    board generation live here. Screens, gestures, question banks, and
//!    score files are the embedding app's business; the app constructs a
//!    session, forwards each user action, and re-reads state to render.
//!
//! 2. **Explicit outcomes**: every mutation reports `Applied` or
//!    `Ignored`. There is no observer registry; the caller re-renders
//!    when told something changed.
//!
//! 3. **One owner per session**: each engine value is exclusively owned
//!    and mutated by a single caller, one action at a time. Nothing here
//!    is shared or locked.
//!
//! ## Modules
//!
//! - `core`: tiles, scores, undo history, seedable RNG
//! - `rules`: the `PuzzleEngine` trait each game implements
//! - `games`: the sliding tiles and hangman engines
//! - `error`: invalid-input errors

pub mod core;
pub mod error;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameKind, GameRng, Score, Tile, UndoRecord, UndoStack};
pub use crate::error::GameError;
pub use crate::games::hangman::{HangmanGame, HangmanGuess, HangmanLetters, LetterState};
pub use crate::games::sliding::{Board, SlideMove, SlidingTiles, SlidingTilesBuilder};
pub use crate::rules::{GameResult, MoveOutcome, PuzzleEngine};
