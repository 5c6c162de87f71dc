//! The seam between game engines and their UI collaborator.

pub mod engine;

pub use engine::{GameResult, MoveOutcome, PuzzleEngine};
