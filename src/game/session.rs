//! The turn loop.

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::core::{Move, Side};

use super::player::Player;
use super::selection::SelectionError;
use super::GameError;

/// Something that happened during a match, reported to the observer.
#[derive(Debug)]
pub enum MatchEvent<'a> {
    /// The position before the first move and after every move.
    Position(&'a Board),
    /// A side is about to be asked for a move.
    Thinking { side: Side, player: &'a str },
    /// A move was played.
    Moved { side: Side, player: &'a str, mv: Move },
    /// A selection was rejected; the same side is asked again.
    Rejected { side: Side, error: &'a SelectionError },
    /// The game is decided.
    Finished { winner: Side },
}

/// How a match ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner: Side,
    pub moves: Vec<Move>,
}

/// Two players alternating on one board until someone wins.
pub struct Match<'p> {
    board: Board,
    white: Box<dyn Player + 'p>,
    black: Box<dyn Player + 'p>,
    moves: Vec<Move>,
}

impl<'p> Match<'p> {
    pub fn new(board: Board, white: Box<dyn Player + 'p>, black: Box<dyn Player + 'p>) -> Self {
        Self {
            board,
            white,
            black,
            moves: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Play to the end without observing.
    pub fn play(&mut self) -> Result<MatchOutcome, GameError> {
        self.play_with(|_| {})
    }

    /// Play to the end, reporting every event to `observer`.
    ///
    /// Rejected selections never touch the board. Any other player error
    /// ends the match.
    pub fn play_with<F>(&mut self, mut observer: F) -> Result<MatchOutcome, GameError>
    where
        F: FnMut(MatchEvent<'_>),
    {
        observer(MatchEvent::Position(&self.board));

        loop {
            if let Some(winner) = self.board.winner() {
                info!(winner = %winner, plies = self.moves.len(), "game over");
                observer(MatchEvent::Finished { winner });
                return Ok(MatchOutcome {
                    winner,
                    moves: self.moves.clone(),
                });
            }

            let side = self.board.to_move();
            let legal = self.board.legal_moves(side);
            let player = match side {
                Side::White => &mut self.white,
                Side::Black => &mut self.black,
            };

            observer(MatchEvent::Thinking {
                side,
                player: player.name(),
            });
            let mv = loop {
                match player.select(&mut self.board, side, &legal) {
                    Ok(mv) => break mv,
                    Err(GameError::Selection(error)) => {
                        warn!(side = %side, %error, "selection rejected");
                        observer(MatchEvent::Rejected { side, error: &error });
                    }
                    Err(err) => return Err(err),
                }
            };

            if !legal.contains(&mv) {
                return Err(GameError::IllegalMove { side, mv });
            }

            self.board.make_move(mv);
            self.moves.push(mv);
            debug!(side = %side, mv = %mv, ply = self.moves.len(), "move played");
            observer(MatchEvent::Moved {
                side,
                player: player.name(),
                mv,
            });
            observer(MatchEvent::Position(&self.board));
        }
    }
}
