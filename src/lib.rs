//! # breakthrough
//!
//! The Breakthrough board game with a time-bounded alpha-beta engine.
//!
//! ## Design Principles
//!
//! 1. **Make/undo, never clone**: the search mutates one `Board` in place
//!    and takes every move back. Undo restores the saved position hash
//!    verbatim, so the incremental hash must never drift.
//!
//! 2. **Deterministic**: Zobrist keys come from a seeded RNG, move
//!    generation and ordering have fixed tie-breaks, and evaluation is a
//!    pure function. Only the wall clock varies between runs.
//!
//! 3. **Configuration Over Constants**: board size, hash seed, search
//!    budget and evaluation weights are plain serde structs.
//!
//! ## Modules
//!
//! - `core`: sides, squares, moves, Zobrist keys, board configuration
//! - `board`: grid snapshot, piece lists, make/undo history, rendering
//! - `rules`: legal move generation and winner detection
//! - `eval`: `Evaluator` trait and the weighted-feature `Heuristic`
//! - `search`: iterative-deepening alpha-beta with a transposition table
//! - `game`: players, human move selection, the turn loop

pub mod board;
pub mod core;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{BoardConfig, Move, MoveList, Side, SideMap, Square, ZobristKeys};

pub use crate::board::{Board, Grid};

pub use crate::eval::{Evaluator, Heuristic, Score, Weights, WIN_SCORE};

pub use crate::search::{
    AlphaBeta, LeafPerspective, ReplacementPolicy, SearchConfig, SearchError, SearchStats,
    TranspositionTable,
};

pub use crate::game::{EnginePlayer, GameError, HumanPlayer, Match, Player, SelectionError};
