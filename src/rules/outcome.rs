//! Game-over detection.

use crate::board::Board;
use crate::core::Side;

use super::movegen::has_legal_move;

/// The winner of the position, if any.
///
/// - White wins with a piece on the last rank.
/// - Black wins with a piece on the first rank.
/// - Otherwise the side to move loses if it has no legal move.
///
/// The ranks are scanned file by file, White's goal before Black's; the
/// mobility check runs once, after the scan.
#[must_use]
pub fn winner(board: &Board) -> Option<Side> {
    let grid = board.grid();
    let last = Side::White.goal_row(grid.size());
    let first = Side::Black.goal_row(grid.size());

    for col in 0..grid.size() {
        if grid.at(last, col) == Some(Side::White) {
            return Some(Side::White);
        }
        if grid.at(first, col) == Some(Side::Black) {
            return Some(Side::Black);
        }
    }

    let to_move = board.to_move();
    if !has_legal_move(grid, board.pieces(to_move), to_move) {
        return Some(to_move.opponent());
    }
    None
}
