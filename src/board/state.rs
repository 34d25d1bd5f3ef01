//! Mutable board state.
//!
//! `Board` owns the grid, both piece lists, the move history and the
//! position hasher, and is the only thing allowed to change any of them.
//! Every mutation keeps three views in agreement:
//!
//! - the grid,
//! - the per-side piece lists (equal, as sets, to the grid cells),
//! - the Zobrist hash (equal to a from-scratch recomputation).
//!
//! `make_move`/`undo_move` must nest strictly LIFO. An undo restores the
//! hash to the value saved by the matching make verbatim; it is never
//! recomputed.

use crate::core::{
    check_board_size, BoardConfig, Move, MoveList, PositionHasher, Side, SideMap, Square,
    ZobristKeys,
};
use crate::rules;

use super::grid::{DiagramError, Grid};
use super::history::HistoryEntry;
use super::piece_list::PieceList;

/// The single mutable game position.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    pieces: SideMap<PieceList>,
    to_move: Side,
    history: Vec<HistoryEntry>,
    hasher: PositionHasher,
}

impl Board {
    /// Create an empty board with White to move.
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        Self::with_keys(config.size, config.zobrist_keys())
    }

    /// Create an empty board hashed with an explicit key table.
    ///
    /// Panics if `size` is not a playable edge or the table was generated
    /// for a different one.
    #[must_use]
    pub fn with_keys(size: usize, keys: ZobristKeys) -> Self {
        if let Err(err) = check_board_size(size) {
            panic!("{err}");
        }
        assert_eq!(
            keys.size(),
            size,
            "Zobrist table is for a {}x{} board, not {size}x{size}",
            keys.size(),
            keys.size()
        );
        Self {
            grid: Grid::new(size),
            pieces: SideMap::default(),
            to_move: Side::White,
            history: Vec::new(),
            hasher: PositionHasher::new(keys),
        }
    }

    /// Standard 8×8 starting position.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::new(&BoardConfig::default());
        board.set_start_position();
        board
    }

    /// Build a position from a text diagram (see `Grid::from_diagram`).
    pub fn from_diagram(diagram: &str, to_move: Side, seed: u64) -> Result<Self, DiagramError> {
        let grid = Grid::from_diagram(diagram)?;
        let mut board = Self::with_keys(grid.size(), ZobristKeys::new(grid.size(), seed));
        for (square, side) in grid.occupied() {
            board.set_occupant(square, Some(side));
        }
        board.set_to_move(to_move);
        Ok(board)
    }

    // === Mutation ===

    /// Replace the occupant of a square, keeping piece lists and hash in step.
    ///
    /// Setting the occupant a square already has leaves the grid and hash
    /// unchanged.
    pub fn set_occupant(&mut self, square: Square, occupant: Option<Side>) {
        if let Some(old) = self.grid.get(square) {
            self.hasher.toggle_cell(square, old);
            self.pieces[old].remove(square);
        }
        self.grid.set(square, occupant);
        if let Some(new) = occupant {
            self.hasher.toggle_cell(square, new);
            self.pieces[new].push(square);
        }
    }

    /// Fill the two ranks nearest each side's edge with that side's pieces.
    pub fn set_start_position(&mut self) {
        let size = self.size();
        for row in [0, 1] {
            for col in 0..size {
                self.set_occupant(Square::new(row as u8, col as u8), Some(Side::White));
            }
        }
        for row in [size - 2, size - 1] {
            for col in 0..size {
                self.set_occupant(Square::new(row as u8, col as u8), Some(Side::Black));
            }
        }
    }

    /// Set the side to move outside of `make_move` (position setup).
    pub fn set_to_move(&mut self, side: Side) {
        if self.to_move != side {
            self.to_move = side;
            self.hasher.toggle_side();
        }
    }

    /// Play a move.
    ///
    /// The source must hold a piece. The destination's previous occupant, if
    /// any, is captured.
    pub fn make_move(&mut self, mv: Move) {
        let mover = self
            .grid
            .get(mv.from)
            .unwrap_or_else(|| panic!("make_move {mv}: no piece on {}", mv.from));
        let captured = self.grid.get(mv.to);
        let prev_hash = self.hasher.hash();

        let mut captured_slot = 0;
        if let Some(victim) = captured {
            captured_slot = self.pieces[victim]
                .remove(mv.to)
                .unwrap_or_else(|| panic!("{victim} piece list is missing {}", mv.to));
            self.hasher.toggle_cell(mv.to, victim);
        }

        self.history.push(HistoryEntry {
            mv,
            captured,
            captured_slot,
            prev_to_move: self.to_move,
            prev_hash,
        });

        self.grid.set(mv.from, None);
        self.hasher.toggle_cell(mv.from, mover);
        self.grid.set(mv.to, Some(mover));
        self.hasher.toggle_cell(mv.to, mover);
        self.pieces[mover].relocate(mv.from, mv.to);

        self.to_move = self.to_move.opponent();
        self.hasher.toggle_side();
    }

    /// Take back the most recent move.
    ///
    /// Panics if there is no move to undo: that is a make/undo mismatch.
    pub fn undo_move(&mut self) -> Move {
        let entry = self
            .history
            .pop()
            .expect("undo_move called with empty history");
        let mv = entry.mv;
        let mover = self
            .grid
            .get(mv.to)
            .unwrap_or_else(|| panic!("undo_move {mv}: no piece on {}", mv.to));

        self.pieces[mover].relocate(mv.to, mv.from);
        self.grid.set(mv.from, Some(mover));
        self.grid.set(mv.to, entry.captured);
        if let Some(victim) = entry.captured {
            self.pieces[victim].insert(entry.captured_slot, mv.to);
        }

        self.to_move = entry.prev_to_move;
        self.hasher.restore(entry.prev_hash);
        mv
    }

    // === Queries ===

    /// Legal moves for a side.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> MoveList {
        rules::legal_moves(&self.grid, &self.pieces[side], side)
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        rules::winner(self)
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[inline]
    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Current incrementally maintained position hash.
    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hasher.hash()
    }

    /// Read-only view of the cells.
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<Side> {
        self.grid.get(square)
    }

    #[must_use]
    pub fn pieces(&self, side: Side) -> &PieceList {
        &self.pieces[side]
    }

    /// Number of unmatched `make_move` calls.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|e| e.mv)
    }

    #[must_use]
    pub fn zobrist_keys(&self) -> &ZobristKeys {
        self.hasher.keys()
    }

    /// Hash of the current position computed from scratch.
    #[must_use]
    pub fn recompute_hash(&self) -> u64 {
        self.hasher.keys().hash_position(self.grid.occupied(), self.to_move)
    }

    /// Check that the piece lists and hash agree with the grid.
    ///
    /// Returns a description of the first disagreement found.
    pub fn validate(&self) -> Result<(), String> {
        for side in Side::ALL {
            let list = &self.pieces[side];
            if list.len() != self.grid.count(side) {
                return Err(format!(
                    "{side} piece list has {} entries, grid has {} pieces",
                    list.len(),
                    self.grid.count(side)
                ));
            }
            if let Some(sq) = list.iter().find(|&sq| self.grid.get(sq) != Some(side)) {
                return Err(format!("{side} piece list holds {sq}, which the grid disagrees with"));
            }
        }
        let recomputed = self.recompute_hash();
        if recomputed != self.hash() {
            return Err(format!(
                "hash drift: incremental {:#018x}, recomputed {recomputed:#018x}",
                self.hash()
            ));
        }
        Ok(())
    }
}
