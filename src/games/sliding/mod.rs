//! Sliding tiles: an n×n grid of numbered tiles with one blank.
//!
//! Numbered tiles slide into the blank until the grid reads in order with
//! the blank in the last cell. Dealing shuffles uniformly and then
//! corrects parity, so every board handed out is solvable.

mod board;
mod manager;
mod moves;

pub use board::Board;
pub use manager::{SlidingTiles, SlidingTilesBuilder};
pub use moves::SlideMove;
