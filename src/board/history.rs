//! Move history for undo.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Side};

/// Everything `undo_move` needs to reverse one `make_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The move that was made.
    pub mv: Move,

    /// Occupant of the destination before the move.
    pub captured: Option<Side>,

    /// Slot the captured piece held in its owner's piece list.
    pub captured_slot: usize,

    /// Side to move before the move.
    pub prev_to_move: Side,

    /// Position hash before the move.
    pub prev_hash: u64,
}

impl HistoryEntry {
    /// Check if the move removed an opposing piece.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
