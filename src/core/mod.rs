//! Core value types shared by the game engines.
//!
//! Everything here is game-agnostic data: tiles, scores, undo snapshots,
//! and the seedable RNG. The rules that give these values meaning live in
//! `games`.

pub mod rng;
pub mod score;
pub mod tile;
pub mod undo;

pub use rng::GameRng;
pub use score::{GameKind, Score};
pub use tile::Tile;
pub use undo::{UndoRecord, UndoStack};
