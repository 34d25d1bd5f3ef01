//! Human move selection.
//!
//! A selection names one entry of the current legal-move list, either by its
//! 1-based position in the list or by coordinates (`b2b3`, `b2-b3`,
//! `b2->b3`, `b2 b3`). Parsing never touches the board.

use thiserror::Error;

use crate::core::{Move, ParseSquareError, Square};

/// Errors from interpreting a human selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("empty selection")]
    Empty,

    #[error("move number {index} is not between 1 and {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot read {0:?} as a move (expected a number or from-to squares like b2b3)")]
    Malformed(String),

    #[error(transparent)]
    Square(#[from] ParseSquareError),

    #[error("{0} is not a legal move")]
    Illegal(Move),
}

/// Resolve `input` against the legal moves of a `size`×`size` board.
pub fn parse_selection(input: &str, legal: &[Move], size: usize) -> Result<Move, SelectionError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(SelectionError::Empty);
    }

    if text.bytes().all(|b| b.is_ascii_digit()) {
        let index: usize = text
            .parse()
            .map_err(|_| SelectionError::Malformed(text.to_string()))?;
        return index
            .checked_sub(1)
            .and_then(|i| legal.get(i).copied())
            .ok_or(SelectionError::IndexOutOfRange {
                index,
                len: legal.len(),
            });
    }

    let (from, to) = split_squares(text).ok_or_else(|| SelectionError::Malformed(text.to_string()))?;
    let mv = Move::new(Square::parse_on(from, size)?, Square::parse_on(to, size)?);
    if legal.contains(&mv) {
        Ok(mv)
    } else {
        Err(SelectionError::Illegal(mv))
    }
}

fn split_squares(text: &str) -> Option<(&str, &str)> {
    for separator in ["->", "-", " "] {
        if let Some((from, to)) = text.split_once(separator) {
            return Some((from.trim(), to.trim()));
        }
    }
    // Run-together form: the second square starts at the second letter.
    let split = text
        .char_indices()
        .skip(1)
        .find(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)?;
    Some(text.split_at(split))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::Side;

    fn start_moves() -> Vec<Move> {
        Board::standard().legal_moves(Side::White).to_vec()
    }

    #[test]
    fn test_select_by_index() {
        let legal = start_moves();
        assert_eq!(parse_selection("1", &legal, 8), Ok(legal[0]));
        assert_eq!(parse_selection(" 22 ", &legal, 8), Ok(legal[21]));
    }

    #[test]
    fn test_index_out_of_range() {
        let legal = start_moves();
        assert_eq!(
            parse_selection("0", &legal, 8),
            Err(SelectionError::IndexOutOfRange { index: 0, len: 22 })
        );
        assert_eq!(
            parse_selection("23", &legal, 8),
            Err(SelectionError::IndexOutOfRange { index: 23, len: 22 })
        );
    }

    #[test]
    fn test_select_by_coordinates() {
        let legal = start_moves();
        let expected = Move::from_coords(1, 1, 2, 1);
        for text in ["b2b3", "b2-b3", "b2->b3", "b2 b3", "B2->B3"] {
            assert_eq!(parse_selection(text, &legal, 8), Ok(expected), "{text}");
        }
    }

    #[test]
    fn test_illegal_coordinates() {
        let legal = start_moves();
        assert_eq!(
            parse_selection("b2b4", &legal, 8),
            Err(SelectionError::Illegal(Move::from_coords(1, 1, 3, 1)))
        );
    }

    #[test]
    fn test_bad_square() {
        let legal = start_moves();
        assert!(matches!(
            parse_selection("b2-z9", &legal, 8),
            Err(SelectionError::Square(ParseSquareError::OffBoard { .. }))
        ));
        assert!(matches!(parse_selection("hello", &legal, 8), Err(SelectionError::Square(_))));
    }

    #[test]
    fn test_malformed_and_empty() {
        let legal = start_moves();
        assert_eq!(parse_selection("   ", &legal, 8), Err(SelectionError::Empty));
        assert_eq!(
            parse_selection("b", &legal, 8),
            Err(SelectionError::Malformed("b".to_string()))
        );
    }
}
