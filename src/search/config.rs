//! Search configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What a transposition-table store does when the hash is already cached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplacementPolicy {
    /// Last write wins, whatever the depths.
    #[default]
    AlwaysReplace,
    /// Keep the existing entry if it was searched deeper than the new one.
    PreferDeeper,
}

/// Whose point of view a depth-0 leaf is scored from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeafPerspective {
    /// The side to move at the leaf.
    #[default]
    SideToMove,
    /// The side the search is choosing a move for.
    Searcher,
}

/// Alpha-beta search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Wall-clock budget for one `choose_move` call.
    pub time_budget: Duration,

    /// Deepest iterative-deepening iteration (plies).
    pub max_depth: u32,

    /// Transposition-table replacement policy.
    pub replacement: ReplacementPolicy,

    /// Perspective used to score depth-0 leaves.
    pub leaf_perspective: LeafPerspective,

    /// Record the explored tree of the last iteration.
    /// Costs one arena node per visited position.
    pub record_tree: bool,

    /// Cache values of nodes whose loop finished after the deadline.
    /// Those values mix in timed-out children, so turning this off keeps
    /// them out of the transposition table.
    pub store_interrupted: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_millis(2500),
            max_depth: 6,
            replacement: ReplacementPolicy::AlwaysReplace,
            leaf_perspective: LeafPerspective::SideToMove,
            record_tree: false,
            store_interrupted: true,
        }
    }
}

impl SearchConfig {
    /// Set the time budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Set the maximum depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the transposition-table replacement policy.
    pub fn with_replacement(mut self, policy: ReplacementPolicy) -> Self {
        self.replacement = policy;
        self
    }

    /// Set the leaf perspective.
    pub fn with_leaf_perspective(mut self, perspective: LeafPerspective) -> Self {
        self.leaf_perspective = perspective;
        self
    }

    /// Enable or disable tree recording.
    pub fn with_record_tree(mut self, record: bool) -> Self {
        self.record_tree = record;
        self
    }

    /// Enable or disable caching of values computed after the deadline.
    pub fn with_store_interrupted(mut self, store: bool) -> Self {
        self.store_interrupted = store;
        self
    }
}
