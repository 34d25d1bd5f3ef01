//! Board coordinates.
//!
//! Rows (ranks) are counted from White's home edge, columns (files) from the
//! left. The algebraic form is the file letter followed by the 1-based rank,
//! so `(row 1, col 2)` prints as `c2`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest board edge the algebraic notation can express (files `a..z`).
pub const MAX_BOARD_SIZE: usize = 26;

/// A cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Step by a signed delta, returning `None` when the result leaves an
    /// `size`×`size` board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, size: usize) -> Option<Square> {
        let row = self.row as isize + d_row;
        let col = self.col as isize + d_col;
        if row < 0 || col < 0 || row >= size as isize || col >= size as isize {
            return None;
        }
        Some(Square::new(row as u8, col as u8))
    }

    /// Parse an algebraic coordinate and check it against a board size.
    pub fn parse_on(text: &str, size: usize) -> Result<Square, ParseSquareError> {
        let square: Square = text.parse()?;
        if square.row() >= size || square.col() >= size {
            return Err(ParseSquareError::OffBoard {
                text: text.trim().to_string(),
                size,
            });
        }
        Ok(square)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row as usize + 1)
    }
}

/// Errors from parsing algebraic coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSquareError {
    #[error("empty coordinate")]
    Empty,

    #[error("invalid file in {0:?} (expected a letter a-z)")]
    InvalidFile(String),

    #[error("invalid rank in {0:?} (expected a number starting at 1)")]
    InvalidRank(String),

    #[error("{text:?} is outside a {size}x{size} board")]
    OffBoard { text: String, size: usize },
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        let mut chars = text.chars();
        let file = chars.next().ok_or(ParseSquareError::Empty)?;
        if !file.is_ascii_lowercase() {
            return Err(ParseSquareError::InvalidFile(s.trim().to_string()));
        }
        let rank: usize = chars
            .as_str()
            .parse()
            .map_err(|_| ParseSquareError::InvalidRank(s.trim().to_string()))?;
        if rank == 0 || rank > MAX_BOARD_SIZE {
            return Err(ParseSquareError::InvalidRank(s.trim().to_string()));
        }
        Ok(Square::new((rank - 1) as u8, file as u8 - b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Square::new(0, 0).to_string(), "a1");
        assert_eq!(Square::new(1, 2).to_string(), "c2");
        assert_eq!(Square::new(7, 7).to_string(), "h8");
    }

    #[test]
    fn test_parse() {
        assert_eq!("a1".parse::<Square>(), Ok(Square::new(0, 0)));
        assert_eq!(" H8 ".parse::<Square>(), Ok(Square::new(7, 7)));
        assert_eq!("b12".parse::<Square>(), Ok(Square::new(11, 1)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Square>(), Err(ParseSquareError::Empty));
        assert!(matches!("1a".parse::<Square>(), Err(ParseSquareError::InvalidFile(_))));
        assert!(matches!("a0".parse::<Square>(), Err(ParseSquareError::InvalidRank(_))));
        assert!(matches!("ax".parse::<Square>(), Err(ParseSquareError::InvalidRank(_))));
    }

    #[test]
    fn test_parse_on_board() {
        assert_eq!(Square::parse_on("h8", 8), Ok(Square::new(7, 7)));
        assert!(matches!(
            Square::parse_on("i1", 8),
            Err(ParseSquareError::OffBoard { size: 8, .. })
        ));
    }

    #[test]
    fn test_offset() {
        let sq = Square::new(0, 0);
        assert_eq!(sq.offset(1, 1, 8), Some(Square::new(1, 1)));
        assert_eq!(sq.offset(-1, 0, 8), None);
        assert_eq!(sq.offset(0, -1, 8), None);
        assert_eq!(Square::new(7, 7).offset(1, 0, 8), None);
    }
}
