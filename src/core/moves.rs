//! Move representation.
//!
//! A move is a (from, to) pair. Whether it captures is a property of the
//! position it is played in, not of the move itself.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::square::Square;

/// Legal-move buffer. An 8×8 side's sixteen pieces with three candidate
/// steps each fit without a heap allocation; larger boards spill.
pub type MoveList = SmallVec<[Move; 64]>;

/// A single step of one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Build a move from raw (fromRow, fromCol, toRow, toCol) coordinates.
    #[must_use]
    pub const fn from_coords(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Self {
        Self::new(Square::new(from_row, from_col), Square::new(to_row, to_col))
    }

    /// The (fromRow, fromCol, toRow, toCol) tuple.
    #[must_use]
    pub const fn coords(self) -> (usize, usize, usize, usize) {
        (self.from.row(), self.from.col(), self.to.row(), self.to.col())
    }

    /// Check if the move changes file.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self.from.col != self.to.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
