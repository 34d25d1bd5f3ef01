//! Playing a game: players, human input, and the turn loop.
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use breakthrough::board::Board;
//! use breakthrough::eval::Heuristic;
//! use breakthrough::game::{EnginePlayer, Match};
//! use breakthrough::search::{AlphaBeta, SearchConfig};
//!
//! let config = SearchConfig::default()
//!     .with_max_depth(1)
//!     .with_time_budget(Duration::from_secs(30));
//! let white = EnginePlayer::new(AlphaBeta::new(Heuristic::default(), config.clone()));
//! let black = EnginePlayer::new(AlphaBeta::new(Heuristic::default(), config));
//!
//! let mut game = Match::new(Board::standard(), Box::new(white), Box::new(black));
//! let outcome = game.play().unwrap();
//! println!("{} wins after {} plies", outcome.winner, outcome.moves.len());
//! ```

pub mod player;
pub mod selection;
pub mod session;

pub use player::{format_move_list, EnginePlayer, HumanPlayer, Player, ScriptedPlayer};
pub use selection::{parse_selection, SelectionError};
pub use session::{Match, MatchEvent, MatchOutcome};

use thiserror::Error;

use crate::core::{Move, Side};
use crate::search::SearchError;

/// Errors that end or interrupt a match.
#[derive(Debug, Error)]
pub enum GameError {
    /// Recoverable: the player is asked again.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("{side} found no move in an undecided position")]
    NoMove { side: Side },

    #[error("{side} played {mv}, which is not legal here")]
    IllegalMove { side: Side, mv: Move },

    #[error("input closed")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
