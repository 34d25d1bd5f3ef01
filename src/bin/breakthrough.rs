//! Interactive Breakthrough against the alpha-beta engine.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::info;

use breakthrough::core::{BoardConfig, Side, DEFAULT_ZOBRIST_SEED};
use breakthrough::eval::Heuristic;
use breakthrough::game::{EnginePlayer, HumanPlayer, Match, MatchEvent, Player};
use breakthrough::search::{AlphaBeta, SearchConfig};
use breakthrough::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum HumanSide {
    White,
    Black,
    /// Engine plays both sides.
    None,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Breakthrough against an alpha-beta engine", long_about = None)]
struct Cli {
    /// Side played from the keyboard (asked in the menu unless --no-menu)
    #[arg(long, value_enum, default_value_t = HumanSide::White)]
    human: HumanSide,

    /// Engine thinking time per move, in milliseconds
    #[arg(long, default_value_t = 2500)]
    time_ms: u64,

    /// Deepest iterative-deepening iteration
    #[arg(long, default_value_t = 6)]
    max_depth: u32,

    /// Board edge length
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(4..=26))]
    size: u8,

    /// Zobrist key seed
    #[arg(long, default_value_t = DEFAULT_ZOBRIST_SEED)]
    seed: u64,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Start one game immediately instead of showing the menu
    #[arg(long)]
    no_menu: bool,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    info!(?cli, "starting");

    if cli.no_menu {
        return play_game(&cli, cli.human);
    }

    loop {
        println!("\n===== BREAKTHROUGH ======\n");
        println!("{}", "=".repeat(20));
        println!("1. START GAME");
        println!("x. EXIT APPLICATION");
        let Some(choice) = prompt("Enter your choice: ")? else {
            return Ok(());
        };
        match choice.to_lowercase().as_str() {
            "1" => {
                println!("Which side do you want to play?");
                println!("1. WHITE");
                println!("2. BLACK");
                let Some(side) = prompt("Enter your choice: ")? else {
                    return Ok(());
                };
                let human = if side == "1" { HumanSide::White } else { HumanSide::Black };
                play_game(&cli, human)?;
            }
            "x" => return Ok(()),
            _ => println!("Invalid option!"),
        }
    }
}

/// Print `message` and read one trimmed line; `None` at end of input.
fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn play_game(cli: &Cli, human: HumanSide) -> Result<(), Box<dyn Error>> {
    let mut board = Board::new(&BoardConfig::new(cli.size as usize).with_seed(cli.seed));
    board.set_start_position();

    let search_config = SearchConfig::default()
        .with_time_budget(Duration::from_millis(cli.time_ms))
        .with_max_depth(cli.max_depth);
    let engine = || -> Box<dyn Player> {
        Box::new(EnginePlayer::new(AlphaBeta::new(Heuristic::default(), search_config.clone())))
    };
    let keyboard = || -> Box<dyn Player> {
        Box::new(HumanPlayer::new(io::stdin().lock(), io::stdout()).with_name("You"))
    };

    let (white, black) = match human {
        HumanSide::White => (keyboard(), engine()),
        HumanSide::Black => (engine(), keyboard()),
        HumanSide::None => (engine(), engine()),
    };

    let mut game = Match::new(board, white, black);
    let outcome = game.play_with(|event| match event {
        MatchEvent::Position(board) => println!("\n{board}"),
        MatchEvent::Thinking { player, .. } if player != "You" => println!("{player} is thinking..."),
        MatchEvent::Thinking { .. } => {}
        MatchEvent::Moved { player, mv, .. } => println!("{player}: {mv}"),
        MatchEvent::Rejected { error, .. } => println!("Invalid move ({error}), try again!"),
        MatchEvent::Finished { winner } => println!("Winner: {winner}"),
    })?;

    let loser = outcome.winner.opponent();
    info!(winner = %outcome.winner, loser = %loser, plies = outcome.moves.len(), "match finished");
    if human == HumanSide::None {
        return Ok(());
    }
    let you = if human == HumanSide::White { Side::White } else { Side::Black };
    println!("{}", if outcome.winner == you { "You win!" } else { "The engine wins." });
    Ok(())
}
