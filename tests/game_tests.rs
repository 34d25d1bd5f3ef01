//! Match and player integration tests.

use std::io::Cursor;
use std::time::Duration;

use breakthrough::board::Board;
use breakthrough::core::{BoardConfig, Move, Side};
use breakthrough::eval::Heuristic;
use breakthrough::game::{
    parse_selection, EnginePlayer, GameError, HumanPlayer, Match, MatchEvent, ScriptedPlayer,
    SelectionError,
};
use breakthrough::search::{AlphaBeta, SearchConfig};

fn engine(depth: u32) -> EnginePlayer {
    EnginePlayer::new(AlphaBeta::new(
        Heuristic::default(),
        SearchConfig::default()
            .with_max_depth(depth)
            .with_time_budget(Duration::from_secs(600)),
    ))
}

fn start(size: usize) -> Board {
    let mut board = Board::new(&BoardConfig::new(size));
    board.set_start_position();
    board
}

// =============================================================================
// Engine vs Engine
// =============================================================================

#[test]
fn test_engine_match_completes() {
    let mut game = Match::new(start(5), Box::new(engine(2)), Box::new(engine(2)));

    let mut positions = 0;
    let mut finished = None;
    let outcome = game
        .play_with(|event| match event {
            MatchEvent::Position(board) => {
                positions += 1;
                assert_eq!(board.hash(), board.recompute_hash());
            }
            MatchEvent::Finished { winner } => finished = Some(winner),
            _ => {}
        })
        .unwrap();

    assert_eq!(finished, Some(outcome.winner));
    assert_eq!(positions, outcome.moves.len() + 1);
    assert_eq!(game.board().winner(), Some(outcome.winner));
}

#[test]
fn test_engine_match_is_deterministic() {
    let first = Match::new(start(5), Box::new(engine(2)), Box::new(engine(1)))
        .play()
        .unwrap();
    let second = Match::new(start(5), Box::new(engine(2)), Box::new(engine(1)))
        .play()
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_replayed_moves_reach_same_result() {
    let outcome = Match::new(start(5), Box::new(engine(1)), Box::new(engine(2)))
        .play()
        .unwrap();

    let mut board = start(5);
    for &mv in &outcome.moves {
        assert!(board.legal_moves(board.to_move()).contains(&mv));
        board.make_move(mv);
    }
    assert_eq!(board.winner(), Some(outcome.winner));
}

// =============================================================================
// Human Input
// =============================================================================

#[test]
fn test_human_against_engine_with_bad_input() {
    // First line is garbage, second is out of range, third is a real move.
    let input = Cursor::new("xyz\n500\nb2-b3\n");
    let human = HumanPlayer::new(input, Vec::new()).with_name("You");
    let mut game = Match::new(start(5), Box::new(human), Box::new(engine(1)));

    let mut moved = Vec::new();
    let result = game.play_with(|event| {
        if let MatchEvent::Moved { side, player, mv } = event {
            moved.push((side, player.to_string(), mv));
        }
    });

    // Input runs out on White's second turn.
    assert!(matches!(result, Err(GameError::InputClosed)));
    assert_eq!(moved.len(), 2);
    assert_eq!(moved[0], (Side::White, "You".to_string(), Move::from_coords(1, 1, 2, 1)));
    assert_eq!(moved[1].0, Side::Black);
    assert_eq!(moved[1].1, "AI");
}

#[test]
fn test_scripted_rejections_reach_observer() {
    let white = ScriptedPlayer::new(["0", "a2-a4", "1"]);
    let black = ScriptedPlayer::new(["a7a6"]);
    let mut game = Match::new(Board::standard(), Box::new(white), Box::new(black));

    let mut errors = Vec::new();
    let _ = game.play_with(|event| {
        if let MatchEvent::Rejected { error, .. } = event {
            errors.push(error.clone());
        }
    });

    assert_eq!(
        errors,
        vec![
            SelectionError::IndexOutOfRange { index: 0, len: 22 },
            SelectionError::Illegal(Move::from_coords(1, 0, 3, 0)),
        ]
    );
    assert_eq!(game.moves(), &[Move::from_coords(1, 0, 2, 0), Move::from_coords(6, 0, 5, 0)]);
}

#[test]
fn test_selection_forms_agree() {
    let board = Board::standard();
    let legal = board.legal_moves(Side::White);
    for (i, mv) in legal.iter().enumerate() {
        let by_index = parse_selection(&(i + 1).to_string(), &legal, 8).unwrap();
        let by_coords = parse_selection(&format!("{}{}", mv.from, mv.to), &legal, 8).unwrap();
        let by_arrow = parse_selection(&mv.to_string(), &legal, 8).unwrap();
        assert_eq!(by_index, *mv);
        assert_eq!(by_coords, *mv);
        assert_eq!(by_arrow, *mv);
    }
}
