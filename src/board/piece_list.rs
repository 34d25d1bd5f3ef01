//! Per-side piece lists.
//!
//! An ordered list of the squares one side occupies. Move generation walks
//! it instead of scanning the grid. `Board` keeps it equal, as a set, to the
//! grid cells that side holds; `make_move`/`undo_move` also keep the order
//! stable so an undo restores the list exactly.

use serde::{Deserialize, Serialize};

use crate::core::Square;

/// Ordered squares of one side's pieces.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceList {
    squares: Vec<Square>,
}

impl PieceList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a square.
    pub fn push(&mut self, square: Square) {
        debug_assert!(!self.contains(square), "{square} already in piece list");
        self.squares.push(square);
    }

    /// Remove a square by value, returning the slot it occupied.
    pub fn remove(&mut self, square: Square) -> Option<usize> {
        let idx = self.position(square)?;
        self.squares.remove(idx);
        Some(idx)
    }

    /// Put a square back at a slot returned by `remove`.
    pub fn insert(&mut self, idx: usize, square: Square) {
        self.squares.insert(idx, square);
    }

    /// Move an entry to a new square in place.
    ///
    /// Panics if `from` is not in the list.
    pub fn relocate(&mut self, from: Square, to: Square) {
        let idx = self
            .position(from)
            .unwrap_or_else(|| panic!("no piece on {from} to relocate"));
        self.squares[idx] = to;
    }

    #[must_use]
    pub fn position(&self, square: Square) -> Option<usize> {
        self.squares.iter().position(|&s| s == square)
    }

    #[must_use]
    pub fn contains(&self, square: Square) -> bool {
        self.squares.contains(&square)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares
    }
}
