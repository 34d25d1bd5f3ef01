//! The default linear evaluator.

use crate::board::Grid;
use crate::core::Side;

use super::features::Features;
use super::weights::Weights;
use super::{Evaluator, Score};

/// Weighted feature evaluation, antisymmetric in the two sides.
///
/// `score(g, s) = weights · features(g, s) − weights · features(g, opp(s))`
///
/// so `score(g, White) == -score(g, Black)` for every grid, and a position
/// that looks the same from both sides scores zero.
#[derive(Clone, Debug, Default)]
pub struct Heuristic {
    weights: Weights,
}

impl Heuristic {
    #[must_use]
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Weighted feature sum for one side only.
    #[must_use]
    pub fn side_terms(&self, grid: &Grid, side: Side) -> Score {
        self.weights.apply(&Features::extract(grid, side))
    }
}

impl Evaluator for Heuristic {
    fn score(&self, grid: &Grid, perspective: Side) -> Score {
        self.side_terms(grid, perspective) - self.side_terms(grid, perspective.opponent())
    }
}
