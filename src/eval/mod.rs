//! Static position evaluation.
//!
//! ## Overview
//!
//! An `Evaluator` maps a grid and a perspective side to an integer score,
//! higher meaning better for that side. `Heuristic` is the built-in linear
//! evaluator over the features in `features`, weighted by `Weights`.
//!
//! Evaluation is stateless and deterministic: identical inputs always give
//! identical scores.
//!
//! ## Usage
//!
//! ```rust
//! use breakthrough::board::Board;
//! use breakthrough::core::Side;
//! use breakthrough::eval::{Evaluator, Heuristic};
//!
//! let board = Board::standard();
//! let heuristic = Heuristic::default();
//! assert_eq!(heuristic.score(board.grid(), Side::White), 0);
//! ```

pub mod features;
pub mod heuristic;
pub mod weights;

pub use features::Features;
pub use heuristic::Heuristic;
pub use weights::Weights;

use crate::board::Grid;
use crate::core::Side;

/// Evaluation and search score.
pub type Score = i64;

/// Magnitude of a decided game. Larger than any heuristic score.
pub const WIN_SCORE: Score = 1_000_000_000_000;

/// Bound of the search window, outside every reachable score.
pub const INFINITY: Score = 4 * WIN_SCORE;

/// Scores a position from one side's point of view.
pub trait Evaluator: Send + Sync {
    /// Score `grid` for `perspective`; higher is better for that side.
    fn score(&self, grid: &Grid, perspective: Side) -> Score;
}
