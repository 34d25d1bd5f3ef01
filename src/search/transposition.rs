//! Transposition table.
//!
//! Maps a position hash to the value a search produced there and the depth
//! it was searched to. A probe only hits when the cached depth covers the
//! requested one.
//!
//! Values are cached as-is, including values from nodes whose loop was cut
//! off by alpha-beta. Such a value is a bound rather than an exact score, so
//! a later probe can return a value that a full-width search would not.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::eval::Score;

use super::config::ReplacementPolicy;

/// A cached search result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtEntry {
    pub value: Score,
    pub depth: u32,
}

/// Hash-keyed cache of search results.
#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    entries: FxHashMap<u64, TtEntry>,
    policy: ReplacementPolicy,
}

impl TranspositionTable {
    #[must_use]
    pub fn new(policy: ReplacementPolicy) -> Self {
        Self {
            entries: FxHashMap::default(),
            policy,
        }
    }

    /// Cached value for `hash` if it was searched at least `depth` plies.
    #[inline]
    #[must_use]
    pub fn probe(&self, hash: u64, depth: u32) -> Option<Score> {
        self.entries
            .get(&hash)
            .filter(|entry| entry.depth >= depth)
            .map(|entry| entry.value)
    }

    /// Raw entry for `hash`, regardless of depth.
    #[must_use]
    pub fn get(&self, hash: u64) -> Option<TtEntry> {
        self.entries.get(&hash).copied()
    }

    /// Cache a result. Returns whether the table was written.
    pub fn store(&mut self, hash: u64, value: Score, depth: u32) -> bool {
        let entry = TtEntry { value, depth };
        match self.policy {
            ReplacementPolicy::AlwaysReplace => {
                self.entries.insert(hash, entry);
                true
            }
            ReplacementPolicy::PreferDeeper => match self.entries.get_mut(&hash) {
                Some(existing) if existing.depth > depth => {
                    trace!(hash, depth, kept = existing.depth, "tt store skipped");
                    false
                }
                Some(existing) => {
                    *existing = entry;
                    true
                }
                None => {
                    self.entries.insert(hash, entry);
                    true
                }
            },
        }
    }

    #[must_use]
    pub fn policy(&self) -> ReplacementPolicy {
        self.policy
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
