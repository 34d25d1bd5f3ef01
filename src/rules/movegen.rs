//! Legal move generation.
//!
//! Each piece may step one rank forward:
//! - straight ahead, into an empty cell;
//! - diagonally, into any cell not held by its own side (empty or a capture).
//!
//! There is no check-like condition to filter for.

use crate::board::{Grid, PieceList};
use crate::core::{Move, MoveList, Side, Square};

const DIAGONALS: [isize; 2] = [-1, 1];

/// Generate every legal move for `side`, walking its piece list in order.
///
/// For each piece the straight push comes first, then the left and right
/// diagonals.
#[must_use]
pub fn legal_moves(grid: &Grid, pieces: &PieceList, side: Side) -> MoveList {
    let mut moves = MoveList::new();
    for from in pieces.iter() {
        for to in destinations(grid, from, side) {
            moves.push(Move::new(from, to));
        }
    }
    moves
}

/// Check whether `side` has at least one legal move.
#[must_use]
pub fn has_legal_move(grid: &Grid, pieces: &PieceList, side: Side) -> bool {
    pieces
        .iter()
        .any(|from| destinations(grid, from, side).next().is_some())
}

fn destinations(grid: &Grid, from: Square, side: Side) -> impl Iterator<Item = Square> + '_ {
    let size = grid.size();
    let dir = side.direction();

    let push = from
        .offset(dir, 0, size)
        .filter(|&to| grid.get(to).is_none());
    let diagonals = DIAGONALS
        .into_iter()
        .filter_map(move |dc| from.offset(dir, dc, size))
        .filter(move |&to| grid.get(to) != Some(side));

    push.into_iter().chain(diagonals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_standard_white_move_count() {
        // Rank 2: 8 pushes + 14 diagonals (edge files lose one). Rank 1 is
        // boxed in by its own pieces.
        let board = Board::standard();
        assert_eq!(board.legal_moves(Side::White).len(), 22);
        assert_eq!(board.legal_moves(Side::Black).len(), 22);
    }

    #[test]
    fn test_push_blocked_by_any_piece() {
        let board = Board::from_diagram(
            "
            ....
            .B..
            .W..
            ....
            ",
            Side::White,
            1,
        )
        .unwrap();
        let moves = board.legal_moves(Side::White);
        assert_eq!(
            moves.as_slice(),
            &[Move::from_coords(1, 1, 2, 0), Move::from_coords(1, 1, 2, 2)]
        );
    }

    #[test]
    fn test_diagonal_capture() {
        let board = Board::from_diagram(
            "
            ....
            B.B.
            .W..
            ....
            ",
            Side::White,
            1,
        )
        .unwrap();
        let moves = board.legal_moves(Side::White);
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&Move::from_coords(1, 1, 2, 0)));
        assert!(moves.contains(&Move::from_coords(1, 1, 2, 2)));
    }

    #[test]
    fn test_black_moves_down() {
        let board = Board::from_diagram(
            "
            ....
            ...B
            ....
            ....
            ",
            Side::Black,
            1,
        )
        .unwrap();
        let moves = board.legal_moves(Side::Black);
        assert_eq!(
            moves.as_slice(),
            &[Move::from_coords(2, 3, 1, 3), Move::from_coords(2, 3, 1, 2)]
        );
    }

    #[test]
    fn test_open_eight_by_eight_fits_inline() {
        // Two full White ranks with open ground ahead. The rear rank is
        // boxed in; the front rank has 8 pushes and 14 diagonals.
        let board = Board::from_diagram(
            "
            ........
            ........
            ........
            ........
            WWWWWWWW
            WWWWWWWW
            ........
            ........
            ",
            Side::White,
            1,
        )
        .unwrap();
        let moves = board.legal_moves(Side::White);
        assert_eq!(moves.len(), 22);
        assert!(!moves.spilled());

        let mut board = Board::new(&crate::core::BoardConfig::new(12));
        board.set_start_position();
        let moves = board.legal_moves(Side::White);
        assert_eq!(moves.len(), 12 + 22);
    }

    #[test]
    fn test_goal_rank_piece_has_no_moves() {
        let board = Board::from_diagram("W...\n....\n....\n....", Side::White, 1).unwrap();
        assert!(board.legal_moves(Side::White).is_empty());
        assert!(!has_legal_move(board.grid(), board.pieces(Side::White), Side::White));
    }

    #[test]
    fn test_has_legal_move_matches_generation() {
        let board = Board::standard();
        for side in Side::ALL {
            assert_eq!(
                has_legal_move(board.grid(), board.pieces(side), side),
                !board.legal_moves(side).is_empty()
            );
        }
    }
}
