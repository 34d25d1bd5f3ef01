//! Alpha-beta search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

use crate::eval::Score;

/// Statistics collected during one `choose_move` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, including cache hits and timed-out nodes.
    pub nodes: u64,

    /// Transposition-table probes that returned a value.
    pub tt_hits: u64,

    /// Values written to the transposition table.
    pub tt_stores: u64,

    /// Move loops cut short by alpha-beta.
    pub cutoffs: u64,

    /// Nodes that returned early because the deadline passed.
    pub timeouts: u64,

    /// Deepest iteration that finished inside the budget.
    pub completed_depth: u32,

    /// Root value of the deepest completed iteration.
    pub best_score: Score,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of entered nodes answered from the cache.
    #[must_use]
    pub fn tt_hit_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.nodes as f64
        }
    }
}
