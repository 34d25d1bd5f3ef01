//! Move ordering.
//!
//! Before a node expands its children, every candidate is played, scored
//! once by the evaluator from the searching side's perspective, and taken
//! back. Candidates go into a min-heap keyed by the negated score, so the
//! best-looking move pops first. Equal scores pop in generation order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::board::Board;
use crate::core::{Move, MoveList, Side};
use crate::eval::{Evaluator, Score};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    key: Score,
    seq: u32,
    mv: Move,
}

/// Min-priority queue of candidate moves.
#[derive(Clone, Debug, Default)]
pub struct MoveOrderer {
    heap: BinaryHeap<Reverse<Candidate>>,
    next_seq: u32,
}

impl MoveOrderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a move with its heuristic score.
    pub fn push(&mut self, mv: Move, score: Score) {
        self.heap.push(Reverse(Candidate {
            key: -score,
            seq: self.next_seq,
            mv,
        }));
        self.next_seq += 1;
    }

    /// Remove the highest-scoring move.
    pub fn pop(&mut self) -> Option<Move> {
        self.heap.pop().map(|Reverse(c)| c.mv)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drain every queued move, best first.
    pub fn drain_sorted(&mut self) -> MoveList {
        std::iter::from_fn(|| self.pop()).collect()
    }

    /// Rank `moves` for a node searched on behalf of `perspective`.
    ///
    /// The board is left exactly as it was found.
    pub fn rank<E: Evaluator + ?Sized>(
        board: &mut Board,
        moves: &[Move],
        evaluator: &E,
        perspective: Side,
    ) -> MoveList {
        let mut orderer = MoveOrderer::new();
        for &mv in moves {
            board.make_move(mv);
            let score = evaluator.score(board.grid(), perspective);
            board.undo_move();
            orderer.push(mv, score);
        }
        orderer.drain_sorted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Heuristic;

    fn mv(col: u8) -> Move {
        Move::from_coords(1, col, 2, col)
    }

    #[test]
    fn test_pops_highest_score_first() {
        let mut orderer = MoveOrderer::new();
        orderer.push(mv(0), 10);
        orderer.push(mv(1), 30);
        orderer.push(mv(2), -5);

        assert_eq!(orderer.len(), 3);
        assert_eq!(orderer.pop(), Some(mv(1)));
        assert_eq!(orderer.pop(), Some(mv(0)));
        assert_eq!(orderer.pop(), Some(mv(2)));
        assert_eq!(orderer.pop(), None);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut orderer = MoveOrderer::new();
        for col in [3, 1, 2] {
            orderer.push(mv(col), 0);
        }
        assert_eq!(orderer.drain_sorted().as_slice(), &[mv(3), mv(1), mv(2)]);
        assert!(orderer.is_empty());
    }

    #[test]
    fn test_rank_is_permutation_and_restores_board() {
        let mut board = Board::standard();
        let hash = board.hash();
        let moves = board.legal_moves(Side::White);

        let ranked = MoveOrderer::rank(&mut board, &moves, &Heuristic::default(), Side::White);

        assert_eq!(board.hash(), hash);
        assert_eq!(board.history_len(), 0);
        assert_eq!(ranked.len(), moves.len());
        let mut a: Vec<_> = ranked.to_vec();
        let mut b: Vec<_> = moves.to_vec();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rank_prefers_winning_push() {
        let mut board = Board::from_diagram(
            "
            ....
            .W..
            ....
            B...
            ",
            Side::White,
            1,
        )
        .unwrap();
        let moves = board.legal_moves(Side::White);
        let ranked = MoveOrderer::rank(&mut board, &moves, &Heuristic::default(), Side::White);
        assert_eq!(ranked[0].to.row(), 3);
    }
}
