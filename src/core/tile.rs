//! Tile value type shared by grid puzzles.
//!
//! ## Identity and ordering
//!
//! Two tiles are equal iff they share an `id`; display payload never
//! participates. Ordering is by `target_position` **descending**: a solved
//! board reads as a *strictly decreasing* run of tiles with the blank
//! last. The reversed sign is deliberate and the win check in
//! `games::sliding` depends on it — invert it and every solvability test
//! goes red.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One cell of a grid puzzle.
///
/// `id` is the tile's identity; on an `n`-sized sliding board the blank
/// carries the sentinel id `n*n - 1`. `target_position` is the row-major
/// index the tile occupies when the puzzle is solved. `payload` is opaque
/// display data (an image slice, say) that the engine stores and returns
/// but never reads.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tile {
    id: u32,
    target_position: u32,
    blank: bool,
    payload: Option<Vec<u8>>,
}

impl Tile {
    /// Create a numbered tile whose home is its own index.
    #[must_use]
    pub fn numbered(id: u32) -> Self {
        Self {
            id,
            target_position: id,
            blank: false,
            payload: None,
        }
    }

    /// Attach opaque display bytes to the tile.
    #[must_use]
    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Mark this tile as the blank.
    ///
    /// The blank flag is the only part of a tile that mutates after
    /// creation.
    pub fn set_blank(&mut self) {
        self.blank = true;
    }

    /// The tile's identity.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The row-major index this tile occupies when solved.
    #[must_use]
    pub fn target_position(&self) -> u32 {
        self.target_position
    }

    /// Whether this is the blank cell tiles slide into.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// The opaque display payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tile {}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    /// Descending by target position, tie-broken by id descending so the
    /// ordering agrees with equality.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .target_position
            .cmp(&self.target_position)
            .then(other.id.cmp(&self.id))
    }
}
