//! Game rules: move generation and outcome detection.
//!
//! Both are pure functions over board state; `Board::legal_moves` and
//! `Board::winner` delegate here.

pub mod movegen;
pub mod outcome;

pub use movegen::{has_legal_move, legal_moves};
pub use outcome::winner;
