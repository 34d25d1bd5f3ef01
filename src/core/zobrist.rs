//! Zobrist position hashing.
//!
//! ## Key table
//!
//! `ZobristKeys` holds one independent 64-bit key per (row, column, side)
//! plus one side-to-move key. The table is generated from an explicit seed
//! with ChaCha8, so the same seed always yields the same keys and the same
//! transposition-table behavior across runs.
//!
//! ## Running hash
//!
//! `PositionHasher` owns a key table and the running hash. The hash of a
//! position is the XOR of the key of every occupied cell, XOR'd with the
//! side key iff Black is to move. Callers keep it current with
//! `toggle_cell` / `toggle_side`; it is never rebuilt on the hot path.
//!
//! ```
//! use breakthrough::core::{PositionHasher, Side, Square, ZobristKeys};
//!
//! let mut hasher = PositionHasher::new(ZobristKeys::new(8, 1));
//! hasher.toggle_cell(Square::new(0, 0), Side::White);
//! hasher.toggle_side();
//! let h = hasher.hash();
//!
//! // Toggling again cancels out.
//! hasher.toggle_cell(Square::new(0, 0), Side::White);
//! hasher.toggle_side();
//! assert_ne!(h, 0);
//! assert_eq!(hasher.hash(), 0);
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::side::{Side, SideMap};
use super::square::Square;

/// Seed used when a caller does not supply one.
pub const DEFAULT_ZOBRIST_SEED: u64 = 1;

/// Deterministic Zobrist key table for an `size`×`size` board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZobristKeys {
    size: usize,
    seed: u64,
    cells: Vec<SideMap<u64>>,
    side: u64,
}

impl ZobristKeys {
    /// Generate the table for a board edge from a seed.
    #[must_use]
    pub fn new(size: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cells = (0..size * size)
            .map(|_| {
                let white = rng.next_u64();
                let black = rng.next_u64();
                SideMap::new(|side| match side {
                    Side::White => white,
                    Side::Black => black,
                })
            })
            .collect();
        let side = rng.next_u64();

        Self {
            size,
            seed,
            cells,
            side,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Key for `side` occupying `square`.
    #[inline]
    #[must_use]
    pub fn cell(&self, square: Square, side: Side) -> u64 {
        self.cells[square.row() * self.size + square.col()][side]
    }

    /// Key XOR'd in while Black is to move.
    #[inline]
    #[must_use]
    pub fn side_key(&self) -> u64 {
        self.side
    }

    /// Hash a position from scratch.
    ///
    /// Used to cross-check the incrementally maintained value; never called
    /// during search.
    pub fn hash_position(
        &self,
        occupied: impl IntoIterator<Item = (Square, Side)>,
        to_move: Side,
    ) -> u64 {
        let mut hash = occupied
            .into_iter()
            .fold(0u64, |acc, (square, side)| acc ^ self.cell(square, side));
        if to_move == Side::Black {
            hash ^= self.side;
        }
        hash
    }
}

/// Incrementally maintained position hash.
#[derive(Clone, Debug)]
pub struct PositionHasher {
    keys: ZobristKeys,
    hash: u64,
}

impl PositionHasher {
    /// Start from the empty board with White to move (hash 0).
    #[must_use]
    pub fn new(keys: ZobristKeys) -> Self {
        Self { keys, hash: 0 }
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn keys(&self) -> &ZobristKeys {
        &self.keys
    }

    /// XOR the key for `side` on `square` into the running hash.
    #[inline]
    pub fn toggle_cell(&mut self, square: Square, side: Side) {
        self.hash ^= self.keys.cell(square, side);
    }

    /// XOR the side-to-move key into the running hash.
    #[inline]
    pub fn toggle_side(&mut self) {
        self.hash ^= self.keys.side;
    }

    /// Overwrite the running hash with a previously saved value.
    #[inline]
    pub fn restore(&mut self, hash: u64) {
        self.hash = hash;
    }
}
