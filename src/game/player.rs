//! Move sources for a match.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::board::Board;
use crate::core::{Move, Side};
use crate::eval::{Evaluator, Heuristic};
use crate::search::AlphaBeta;

use super::selection::parse_selection;
use super::GameError;

/// Something that picks moves.
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;

    /// Pick one of `legal` for `side`.
    ///
    /// Implementations may play moves on `board` while thinking but must
    /// leave it as they found it. A `GameError::Selection` asks the caller
    /// to try again.
    fn select(&mut self, board: &mut Board, side: Side, legal: &[Move]) -> Result<Move, GameError>;
}

/// Computer player backed by alpha-beta search.
pub struct EnginePlayer<E: Evaluator = Heuristic> {
    name: String,
    search: AlphaBeta<E>,
}

impl<E: Evaluator> EnginePlayer<E> {
    pub fn new(search: AlphaBeta<E>) -> Self {
        Self {
            name: "AI".to_string(),
            search,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn search(&self) -> &AlphaBeta<E> {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut AlphaBeta<E> {
        &mut self.search
    }
}

impl<E: Evaluator> Player for EnginePlayer<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn select(&mut self, board: &mut Board, side: Side, _legal: &[Move]) -> Result<Move, GameError> {
        self.search
            .choose_move(board, side)?
            .ok_or(GameError::NoMove { side })
    }
}

/// Player that reads selections from a text stream and writes prompts to
/// another. Invalid selections are reported and re-prompted.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            name: "Human".to_string(),
            input,
            output,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn select(&mut self, board: &mut Board, _side: Side, legal: &[Move]) -> Result<Move, GameError> {
        write!(self.output, "{}", format_move_list(legal))?;
        loop {
            write!(self.output, "Choose move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            match parse_selection(&line, legal, board.size()) {
                Ok(mv) => return Ok(mv),
                Err(err) => writeln!(self.output, "Invalid move ({err}), try again!")?,
            }
        }
    }
}

/// Player that replays a fixed list of selections, in the same text forms
/// a human would type.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPlayer {
    name: String,
    inputs: VecDeque<String>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: "Script".to_string(),
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn select(&mut self, board: &mut Board, _side: Side, legal: &[Move]) -> Result<Move, GameError> {
        let input = self.inputs.pop_front().ok_or(GameError::InputClosed)?;
        Ok(parse_selection(&input, legal, board.size())?)
    }
}

/// Numbered move list, four entries per line with a blank line between rows.
#[must_use]
pub fn format_move_list(legal: &[Move]) -> String {
    const COLUMNS: usize = 4;
    let mut out = String::new();
    for (row, chunk) in legal.chunks(COLUMNS).enumerate() {
        let line: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(i, mv)| format!("{:<15}", format!("{}. {}", row * COLUMNS + i + 1, mv)))
            .collect();
        out.push_str(line.concat().trim_end());
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::time::Duration;

    use super::*;
    use crate::game::SelectionError;
    use crate::search::SearchConfig;

    #[test]
    fn test_format_move_list() {
        let board = Board::standard();
        let legal = board.legal_moves(Side::White);
        let text = format_move_list(&legal);

        let rows: Vec<&str> = text.split("\n\n").filter(|r| !r.is_empty()).collect();
        assert_eq!(rows.len(), 6);
        assert!(rows[0].starts_with("1. a2->a3"));
        assert!(rows[0].contains("4. "));
        assert!(rows[5].contains("22. "));
        assert!(!rows[5].contains("23. "));
    }

    #[test]
    fn test_human_reprompts_until_valid() {
        let mut board = Board::standard();
        let legal = board.legal_moves(Side::White);
        let input = Cursor::new("99\nb2-b4\nb2-b3\n");
        let mut human = HumanPlayer::new(input, Vec::new());

        let mv = human.select(&mut board, Side::White, &legal).unwrap();
        assert_eq!(mv, Move::from_coords(1, 1, 2, 1));
        assert_eq!(board.history_len(), 0);

        let output = String::from_utf8(human.into_output()).unwrap();
        assert_eq!(output.matches("Choose move: ").count(), 3);
        assert_eq!(output.matches("Invalid move").count(), 2);
    }

    #[test]
    fn test_human_input_closed() {
        let mut board = Board::standard();
        let legal = board.legal_moves(Side::White);
        let mut human = HumanPlayer::new(Cursor::new(""), Vec::new());
        assert!(matches!(
            human.select(&mut board, Side::White, &legal),
            Err(GameError::InputClosed)
        ));
    }

    #[test]
    fn test_scripted_player() {
        let mut board = Board::standard();
        let legal = board.legal_moves(Side::White);
        let mut script = ScriptedPlayer::new(["a2a3", "nonsense"]);

        assert_eq!(
            script.select(&mut board, Side::White, &legal).unwrap(),
            Move::from_coords(1, 0, 2, 0)
        );
        assert!(matches!(
            script.select(&mut board, Side::White, &legal),
            Err(GameError::Selection(SelectionError::Square(_)))
        ));
        assert!(matches!(
            script.select(&mut board, Side::White, &legal),
            Err(GameError::InputClosed)
        ));
        assert_eq!(script.remaining(), 0);
    }

    #[test]
    fn test_engine_player_moves() {
        let mut board = Board::standard();
        let legal = board.legal_moves(Side::White);
        let search = AlphaBeta::new(
            Heuristic::default(),
            SearchConfig::default()
                .with_max_depth(1)
                .with_time_budget(Duration::from_secs(60)),
        );
        let mut engine = EnginePlayer::new(search).with_name("Deep");

        let mv = engine.select(&mut board, Side::White, &legal).unwrap();
        assert!(legal.contains(&mv));
        assert_eq!(engine.name(), "Deep");
        assert_eq!(engine.search().stats().completed_depth, 1);
    }
}
