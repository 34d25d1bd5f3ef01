//! The n×n cell grid.
//!
//! A `Grid` is the read-only view the evaluator scores. `Board` owns one
//! and keeps it in step with its piece lists and hash; a `Grid` on its own
//! carries no side-to-move and no history.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{check_board_size, BoardSizeError, Side, Square};

/// Errors from parsing a text diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    #[error("diagram has {rows} rows but rank 1 line has {cols} cells")]
    NotSquare { rows: usize, cols: usize },

    #[error("row {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown cell character {0:?} (expected W, B or .)")]
    UnknownCell(char),

    #[error(transparent)]
    Size(#[from] BoardSizeError),
}

/// Square grid of optional occupants.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Side>>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Parse a diagram of `W`, `B` and `.` characters.
    ///
    /// Lines are listed from the last rank down to rank 1, the way the board
    /// is rendered. Whitespace inside a line and blank lines are ignored.
    ///
    /// ```
    /// use breakthrough::board::Grid;
    /// use breakthrough::core::{Side, Square};
    ///
    /// let grid = Grid::from_diagram("
    ///     B...
    ///     ....
    ///     ....
    ///     ...W
    /// ").unwrap();
    /// assert_eq!(grid.get(Square::new(3, 0)), Some(Side::Black));
    /// assert_eq!(grid.get(Square::new(0, 3)), Some(Side::White));
    /// ```
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        let lines: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|line| !line.is_empty())
            .collect();

        let size = lines.len();
        let cols = lines.last().map_or(0, Vec::len);
        if cols != size {
            return Err(DiagramError::NotSquare { rows: size, cols });
        }
        check_board_size(size)?;

        let mut grid = Grid::new(size);
        for (line_idx, line) in lines.iter().enumerate() {
            if line.len() != size {
                return Err(DiagramError::RaggedRow {
                    line: line_idx,
                    found: line.len(),
                    expected: size,
                });
            }
            let row = size - 1 - line_idx;
            for (col, &c) in line.iter().enumerate() {
                let occupant = match c {
                    'W' | 'w' => Some(Side::White),
                    'B' | 'b' => Some(Side::Black),
                    '.' => None,
                    other => return Err(DiagramError::UnknownCell(other)),
                };
                grid.set(Square::new(row as u8, col as u8), occupant);
            }
        }
        Ok(grid)
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn offset(&self, square: Square) -> usize {
        debug_assert!(square.row() < self.size && square.col() < self.size);
        square.row() * self.size + square.col()
    }

    /// Occupant of a square.
    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Side> {
        self.cells[self.offset(square)]
    }

    /// Occupant at raw (row, col).
    #[inline]
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Option<Side> {
        self.cells[row * self.size + col]
    }

    /// Overwrite a cell. Only `Board` may call this on its own grid, since
    /// the piece lists and hash must change with it.
    pub(crate) fn set(&mut self, square: Square, occupant: Option<Side>) {
        let idx = self.offset(square);
        self.cells[idx] = occupant;
    }

    /// Iterate over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Side)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|side| (Square::new((i / size) as u8, (i % size) as u8), side))
        })
    }

    /// Iterate over the squares held by one side in row-major order.
    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        self.occupied()
            .filter(move |&(_, s)| s == side)
            .map(|(square, _)| square)
    }

    /// Number of pieces a side has on the grid.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|&&c| c == Some(side)).count()
    }

    /// The grid with every rank reversed left to right.
    #[must_use]
    pub fn mirror_files(&self) -> Self {
        let mut mirrored = Grid::new(self.size);
        for (square, side) in self.occupied() {
            let col = self.size - 1 - square.col();
            mirrored.set(Square::new(square.row, col as u8), Some(side));
        }
        mirrored
    }

    /// The grid turned to the other side's point of view: ranks reversed and
    /// piece colours swapped.
    #[must_use]
    pub fn flip_sides(&self) -> Self {
        let mut flipped = Grid::new(self.size);
        for (square, side) in self.occupied() {
            let row = self.size - 1 - square.row();
            flipped.set(Square::new(row as u8, square.col), Some(side.opponent()));
        }
        flipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let grid = Grid::new(8);
        assert_eq!(grid.size(), 8);
        assert_eq!(grid.occupied().count(), 0);
    }

    #[test]
    fn test_from_diagram_orientation() {
        let grid = Grid::from_diagram(
            "
            .B..
            ....
            ....
            W...
            ",
        )
        .unwrap();
        assert_eq!(grid.at(0, 0), Some(Side::White));
        assert_eq!(grid.at(3, 1), Some(Side::Black));
        assert_eq!(grid.count(Side::White), 1);
        assert_eq!(grid.count(Side::Black), 1);
    }

    #[test]
    fn test_from_diagram_errors() {
        assert!(matches!(
            Grid::from_diagram("....\n....\n....\n..."),
            Err(DiagramError::NotSquare { .. })
        ));
        assert!(matches!(
            Grid::from_diagram("....\n....\n....\n..x."),
            Err(DiagramError::UnknownCell('x'))
        ));
        assert!(matches!(
            Grid::from_diagram("....\n...\n....\n...."),
            Err(DiagramError::RaggedRow { line: 1, .. })
        ));
    }

    #[test]
    fn test_from_diagram_rejects_unplayable_sizes() {
        assert_eq!(
            Grid::from_diagram("...\n...\n..."),
            Err(DiagramError::Size(BoardSizeError(3)))
        );

        let line = ".".repeat(300);
        let huge = vec![line.as_str(); 300].join("\n");
        assert_eq!(
            Grid::from_diagram(&huge),
            Err(DiagramError::Size(BoardSizeError(300)))
        );

        let line = ".".repeat(26);
        let largest = vec![line.as_str(); 26].join("\n");
        assert_eq!(Grid::from_diagram(&largest).map(|g| g.size()), Ok(26));
    }

    #[test]
    fn test_mirror_files() {
        let grid = Grid::from_diagram("W...\n....\n..B.\n....").unwrap();
        let mirrored = grid.mirror_files();
        assert_eq!(mirrored.at(3, 3), Some(Side::White));
        assert_eq!(mirrored.at(1, 1), Some(Side::Black));
        assert_eq!(mirrored.mirror_files(), grid);
    }

    #[test]
    fn test_flip_sides() {
        let grid = Grid::from_diagram("W...\n....\n..B.\n....").unwrap();
        let flipped = grid.flip_sides();
        assert_eq!(flipped.at(0, 0), Some(Side::Black));
        assert_eq!(flipped.at(2, 2), Some(Side::White));
        assert_eq!(flipped.flip_sides(), grid);
    }

    #[test]
    fn test_squares_of() {
        let grid = Grid::from_diagram("B..B\n....\n....\nW...").unwrap();
        let black: Vec<_> = grid.squares_of(Side::Black).collect();
        assert_eq!(black, vec![Square::new(3, 0), Square::new(3, 3)]);
    }
}
