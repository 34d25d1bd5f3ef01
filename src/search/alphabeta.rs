//! Iterative-deepening alpha-beta search.
//!
//! Each node runs the same sequence of checks on entry:
//!
//! 1. deadline passed: return the static value from the searcher's view
//! 2. transposition-table hit at sufficient depth (never at the root)
//! 3. decided game: `±WIN_SCORE` from the searcher's view
//! 4. depth exhausted: static value (see `LeafPerspective`)
//! 5. otherwise expand the children in heuristic order with alpha-beta
//!    pruning, then cache the backed-up value
//!
//! A timed-out node itself is never cached. An interior node whose loop
//! finished after the deadline is cached unless
//! `SearchConfig::store_interrupted` is off. Either way an iteration that
//! hit the deadline never replaces the move of a completed one.

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, error, info, trace, warn};

use crate::board::Board;
use crate::core::{Move, Side};
use crate::eval::{Evaluator, Heuristic, Score, INFINITY, WIN_SCORE};

use super::config::{LeafPerspective, SearchConfig};
use super::deadline::Deadline;
use super::node::{NodeId, NodeKind};
use super::ordering::MoveOrderer;
use super::stats::SearchStats;
use super::transposition::TranspositionTable;
use super::tree::ExplorationTree;

/// Errors raised by the search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// An undecided position produced no moves. The board and the outcome
    /// rules disagree, which is a bug rather than a game state.
    #[error("{side} has no legal moves at an undecided position (hash {hash:#018x})")]
    NoLegalMoves { side: Side, hash: u64 },
}

/// Result of one fixed-depth root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootOutcome {
    pub depth: u32,
    /// Root value from the searcher's view.
    pub score: Score,
    /// Best root move, `None` when the root is decided or timed out on entry.
    pub best_move: Option<Move>,
    /// The iteration finished before the deadline.
    pub completed: bool,
}

/// Alpha-beta searcher.
///
/// Owns its transposition table, which persists across `choose_move`
/// calls until `clear_cache`.
pub struct AlphaBeta<E: Evaluator = Heuristic> {
    evaluator: E,
    config: SearchConfig,
    tt: TranspositionTable,
    stats: SearchStats,
    tree: Option<ExplorationTree>,
    deadline: Deadline,
    aborted: bool,
}

impl Default for AlphaBeta<Heuristic> {
    fn default() -> Self {
        Self::new(Heuristic::default(), SearchConfig::default())
    }
}

impl<E: Evaluator> AlphaBeta<E> {
    /// Create a searcher.
    pub fn new(evaluator: E, config: SearchConfig) -> Self {
        let tree = config.record_tree.then(|| ExplorationTree::new(Side::White));
        Self {
            evaluator,
            tt: TranspositionTable::new(config.replacement),
            deadline: Deadline::start(config.time_budget),
            config,
            stats: SearchStats::default(),
            tree,
            aborted: false,
        }
    }

    /// Pick a move for `side` by iterative deepening.
    ///
    /// Depths `1..=max_depth` are searched in turn until the time budget
    /// runs out. The move of the deepest iteration that completed is
    /// returned. If none completed, the best move of the interrupted
    /// first iteration is used, and failing that the top-ordered move.
    ///
    /// Returns `Ok(None)` only when the game is already decided.
    /// The board is restored before returning.
    pub fn choose_move(&mut self, board: &mut Board, side: Side) -> Result<Option<Move>, SearchError> {
        let start = Instant::now();
        self.stats.reset();
        self.deadline = Deadline::start(self.config.time_budget);

        let mut best: Option<Move> = None;
        let mut fallback: Option<Move> = None;

        for depth in 1..=self.config.max_depth {
            if self.deadline.expired() {
                break;
            }
            let outcome = self.search_root(board, depth, side)?;

            if !outcome.completed {
                warn!(depth, nodes = self.stats.nodes, "deadline reached mid-iteration, result discarded");
                if best.is_none() {
                    fallback = outcome.best_move;
                }
                break;
            }

            let Some(mv) = outcome.best_move else {
                // Decided root; deeper iterations see the same thing.
                break;
            };
            best = Some(mv);
            self.stats.completed_depth = depth;
            self.stats.best_score = outcome.score;
            debug!(depth, score = outcome.score, best = %mv, nodes = self.stats.nodes, "iteration complete");

            if outcome.score.abs() >= WIN_SCORE {
                break;
            }
        }

        let mut chosen = best.or(fallback);
        if chosen.is_none() && board.winner().is_none() {
            let moves = board.legal_moves(board.to_move());
            chosen = MoveOrderer::rank(board, &moves, &self.evaluator, side).first().copied();
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        info!(
            side = %side,
            chosen = ?chosen.map(|m| m.to_string()),
            depth = self.stats.completed_depth,
            score = self.stats.best_score,
            nodes = self.stats.nodes,
            time_us = self.stats.time_us,
            "move chosen"
        );
        Ok(chosen)
    }

    /// One fixed-depth search from the root, under a fresh deadline.
    pub fn search_to_depth(&mut self, board: &mut Board, depth: u32, side: Side) -> Result<RootOutcome, SearchError> {
        self.stats.reset();
        self.deadline = Deadline::start(self.config.time_budget);
        let outcome = self.search_root(board, depth, side)?;
        if outcome.completed {
            self.stats.completed_depth = depth;
            self.stats.best_score = outcome.score;
        }
        Ok(outcome)
    }

    fn search_root(&mut self, board: &mut Board, depth: u32, side: Side) -> Result<RootOutcome, SearchError> {
        self.aborted = false;
        let root = self.tree.as_mut().map(|tree| {
            tree.reset(board.to_move());
            tree.root()
        });
        let history = board.history_len();

        let (score, best_move) = self.search_node(board, depth, -INFINITY, INFINITY, side, root, true)?;

        debug_assert_eq!(board.history_len(), history);
        Ok(RootOutcome {
            depth,
            score,
            best_move,
            completed: !self.aborted,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn search_node(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        perspective: Side,
        node: Option<NodeId>,
        is_root: bool,
    ) -> Result<(Score, Option<Move>), SearchError> {
        self.stats.nodes += 1;

        if self.deadline.expired() {
            self.aborted = true;
            self.stats.timeouts += 1;
            let value = self.evaluator.score(board.grid(), perspective);
            self.record(node, value, NodeKind::Timeout);
            return Ok((value, None));
        }

        if !is_root {
            if let Some(value) = self.tt.probe(board.hash(), depth) {
                self.stats.tt_hits += 1;
                self.record(node, value, NodeKind::Cached);
                return Ok((value, None));
            }
        }

        if let Some(winner) = board.winner() {
            let value = if winner == perspective { WIN_SCORE } else { -WIN_SCORE };
            self.record(node, value, NodeKind::Terminal);
            return Ok((value, None));
        }

        if depth == 0 {
            let side = match self.config.leaf_perspective {
                LeafPerspective::SideToMove => board.to_move(),
                LeafPerspective::Searcher => perspective,
            };
            let value = self.evaluator.score(board.grid(), side);
            self.record(node, value, NodeKind::Leaf);
            return Ok((value, None));
        }

        let to_move = board.to_move();
        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            let hash = board.hash();
            error!(side = %to_move, hash, "no legal moves at undecided node");
            return Err(SearchError::NoLegalMoves { side: to_move, hash });
        }

        let ordered = MoveOrderer::rank(board, &moves, &self.evaluator, perspective);
        let maximizing = to_move == perspective;
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = None;

        for mv in ordered {
            let child = match (self.tree.as_mut(), node) {
                (Some(tree), Some(id)) => Some(tree.add_child(id, mv)),
                _ => None,
            };

            board.make_move(mv);
            let result = self.search_node(board, depth - 1, alpha, beta, perspective, child, false);
            board.undo_move();
            let (value, _) = result?;

            if maximizing {
                if value > best {
                    best = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best);
            } else {
                if value < best {
                    best = value;
                    best_move = Some(mv);
                }
                beta = beta.min(best);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                trace!(depth, alpha, beta, "cutoff");
                if let (Some(tree), Some(id)) = (self.tree.as_mut(), node) {
                    tree.get_mut(id).cut_off = true;
                }
                break;
            }
        }

        let cacheable = !self.aborted || self.config.store_interrupted;
        if cacheable && self.tt.store(board.hash(), best, depth) {
            self.stats.tt_stores += 1;
        }
        self.record(node, best, NodeKind::Interior);
        Ok((best, best_move))
    }

    fn record(&mut self, node: Option<NodeId>, value: Score, kind: NodeKind) {
        if let (Some(tree), Some(id)) = (self.tree.as_mut(), node) {
            tree.get_mut(id).resolve(value, kind);
        }
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Tree of the last iteration, when recording is enabled.
    #[must_use]
    pub fn tree(&self) -> Option<&ExplorationTree> {
        self.tree.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Drop every cached transposition-table entry.
    pub fn clear_cache(&mut self) {
        debug!(entries = self.tt.len(), "clearing transposition table");
        self.tt.clear();
    }
}
