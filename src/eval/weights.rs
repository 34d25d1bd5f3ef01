//! Heuristic weights.

use serde::{Deserialize, Serialize};

use super::features::Features;
use super::Score;

/// Fixed weights of the linear evaluation.
///
/// Positive features add, `opponent_threat` and `blocked` subtract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub advance: Score,
    pub mobility: Score,
    pub material: Score,
    pub opponent_threat: Score,
    pub passed: Score,
    pub blocked: Score,
    pub chain: Score,
    pub tempo: Score,
    pub centrality: Score,
    /// Bonus when no piece has an opposing piece on a forward diagonal.
    pub unopposed_advance: Score,
    /// Bonus when a piece can step onto the goal rank next move.
    pub win_next: Score,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            advance: 200,
            mobility: 40,
            material: 50,
            opponent_threat: 80,
            passed: 400,
            blocked: 50,
            chain: 30,
            tempo: 150,
            centrality: 10,
            unopposed_advance: 1_000_000_000,
            win_next: 100_000,
        }
    }
}

impl Weights {
    /// Weighted sum of one side's features.
    #[must_use]
    pub fn apply(&self, f: &Features) -> Score {
        let mut score = self.advance * f.advancement
            + self.mobility * f.mobility
            - self.opponent_threat * f.opponent_threat
            + self.material * f.material
            + self.passed * f.passed
            - self.blocked * f.blocked
            + self.chain * f.chained
            + self.tempo * f.tempo
            + self.centrality * f.centrality;
        if f.unopposed_advance {
            score += self.unopposed_advance;
        }
        if f.win_next {
            score += self.win_next;
        }
        score
    }
}
