//! Positional features for one side.
//!
//! Every feature is computed from the grid alone. Directions are relative to
//! the side: "forward" is toward its goal rank, "ahead" means strictly
//! closer to that rank.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{Side, Square};

const FORWARD_STEPS: [isize; 3] = [0, -1, 1];

/// Raw feature counts for one side of a position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    /// Pieces on the board.
    pub material: i64,
    /// Sum of ranks travelled from the home edge.
    pub advancement: i64,
    /// Forward cells (push and both diagonals) not held by the side.
    pub mobility: i64,
    /// The opponent's advancement.
    pub opponent_threat: i64,
    /// Pieces with no opposing piece ahead in their own or adjacent files.
    pub passed: i64,
    /// Pieces with no forward cell available.
    pub blocked: i64,
    /// Own pieces diagonally behind each piece, summed.
    pub chained: i64,
    /// +1 if this side's lead piece is nearer its goal than the opponent's,
    /// -1 if farther, 0 on a tie.
    pub tempo: i64,
    /// Sum of `size - distance to the nearest centre cell`.
    pub centrality: i64,
    /// No piece of this side has an opposing piece on a forward diagonal.
    pub unopposed_advance: bool,
    /// A piece stands one rank from the goal with the cell ahead empty.
    pub win_next: bool,
}

impl Features {
    /// Compute every feature for `side`.
    #[must_use]
    pub fn extract(grid: &Grid, side: Side) -> Self {
        let size = grid.size();
        let dir = side.direction();
        let opponent = side.opponent();
        let centres = centre_cells(size);

        let mut f = Features {
            opponent_threat: advancement(grid, opponent),
            tempo: tempo(grid, side),
            unopposed_advance: true,
            ..Features::default()
        };

        for square in grid.squares_of(side) {
            f.material += 1;
            f.advancement += side.advancement(square.row(), size) as i64;

            let mut open = 0;
            for dc in FORWARD_STEPS {
                if let Some(to) = square.offset(dir, dc, size) {
                    let occupant = grid.get(to);
                    if occupant != Some(side) {
                        open += 1;
                    }
                    if dc != 0 && occupant == Some(opponent) {
                        f.unopposed_advance = false;
                    }
                }
            }
            f.mobility += open;
            if open == 0 {
                f.blocked += 1;
            }

            for dc in [-1, 1] {
                if let Some(behind) = square.offset(-dir, dc, size) {
                    if grid.get(behind) == Some(side) {
                        f.chained += 1;
                    }
                }
            }

            if is_passed(grid, square, side) {
                f.passed += 1;
            }

            let distance = centres
                .iter()
                .map(|&(r, c)| square.row().abs_diff(r) + square.col().abs_diff(c))
                .min()
                .unwrap_or(0);
            f.centrality += size as i64 - distance as i64;

            if square.row() as isize + dir == side.goal_row(size) as isize {
                if let Some(goal) = square.offset(dir, 0, size) {
                    if grid.get(goal).is_none() {
                        f.win_next = true;
                    }
                }
            }
        }

        f
    }
}

/// Sum of ranks travelled by `side`'s pieces.
#[must_use]
pub fn advancement(grid: &Grid, side: Side) -> i64 {
    grid.squares_of(side)
        .map(|sq| side.advancement(sq.row(), grid.size()) as i64)
        .sum()
}

/// Ranks between `side`'s most advanced piece and its goal, or the board
/// size if it has no pieces.
#[must_use]
pub fn goal_distance(grid: &Grid, side: Side) -> usize {
    let size = grid.size();
    grid.squares_of(side)
        .map(|sq| size - 1 - side.advancement(sq.row(), size))
        .min()
        .unwrap_or(size)
}

fn tempo(grid: &Grid, side: Side) -> i64 {
    let own = goal_distance(grid, side);
    let theirs = goal_distance(grid, side.opponent());
    match own.cmp(&theirs) {
        std::cmp::Ordering::Less => 1,
        std::cmp::Ordering::Greater => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

fn is_passed(grid: &Grid, square: Square, side: Side) -> bool {
    let size = grid.size();
    let opponent = side.opponent();
    let first_col = square.col().saturating_sub(1);
    let last_col = (square.col() + 1).min(size - 1);
    let (first_row, end_row) = match side {
        Side::White => (square.row() + 1, size),
        Side::Black => (0, square.row()),
    };
    (first_row..end_row)
        .flat_map(|row| (first_col..=last_col).map(move |col| (row, col)))
        .all(|(row, col)| grid.at(row, col) != Some(opponent))
}

/// The centre cell, or the four centre cells on an even board.
fn centre_cells(size: usize) -> Vec<(usize, usize)> {
    let mid = size / 2;
    if size % 2 == 0 {
        vec![(mid - 1, mid - 1), (mid - 1, mid), (mid, mid - 1), (mid, mid)]
    } else {
        vec![(mid, mid)]
    }
}
