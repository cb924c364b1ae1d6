//! Othello-Rust: an Othello engine with a five-level computer opponent.
//!
//! ## Usage
//!
//! - `othello-rust` - Show a demo game
//! - `othello-rust protocol` - Start the text protocol server for GUI integration
//! - `othello-rust demo --black-level 5 --white-level 1` - Watch two levels play

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use othello_rust::ai::{Level, Searcher};
use othello_rust::board::Player;
use othello_rust::constants::DEFAULT_LEVEL;
use othello_rust::game::GameState;
use othello_rust::protocol::ProtocolEngine;

/// Othello-Rust: an Othello engine with minimax opponents
#[derive(Parser)]
#[command(name = "othello-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the level-1 random player (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log search and game events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol server on stdin/stdout
    Protocol {
        /// Difficulty of generated moves (1-5)
        #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
        level: u8,
    },
    /// Play one computer-vs-computer game and print it
    Demo {
        /// Difficulty for Black (1-5)
        #[arg(long, default_value_t = DEFAULT_LEVEL)]
        black_level: u8,
        /// Difficulty for White (1-5)
        #[arg(long, default_value_t = 1)]
        white_level: u8,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Protocol { level }) => {
            let level = Level::try_from(level).context("invalid --level")?;
            let mut engine = ProtocolEngine::with_searcher(searcher(level, cli.seed));
            engine.run().context("protocol i/o failed")?;
        }
        Some(Commands::Demo {
            black_level,
            white_level,
        }) => run_demo(black_level, white_level, cli.seed)?,
        None => run_demo(DEFAULT_LEVEL, 1, cli.seed)?,
    }
    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn searcher(level: Level, seed: Option<u64>) -> Searcher {
    match seed {
        Some(seed) => Searcher::with_seed(level, seed),
        None => Searcher::new(level),
    }
}

fn run_demo(black_level: u8, white_level: u8, seed: Option<u64>) -> Result<()> {
    let black = Level::try_from(black_level).context("invalid --black-level")?;
    let white = Level::try_from(white_level).context("invalid --white-level")?;
    println!("Othello-Rust: Black at {black} vs White at {white}\n");

    let mut black_ai = searcher(black, seed);
    let mut white_ai = searcher(white, seed.map(|s| s.wrapping_add(1)));
    let mut game = GameState::new();
    println!("{}", game.board().labeled());

    while !game.is_over() {
        let player = game.to_move();
        let ai = match player {
            Player::Black => &mut black_ai,
            Player::White => &mut white_ai,
        };
        match game.play_ai(ai)? {
            Some(mv) => println!("{} plays {mv}", player.name()),
            None => println!("{} passes", player.name()),
        }
    }

    println!("\n{}", game.board().labeled());
    let (b, w) = game.score();
    match game.winner() {
        Some(p) => println!("{} wins {b}-{w}", p.name()),
        None => println!("Draw {b}-{w}"),
    }
    info!(black = b, white = w, "demo finished");
    Ok(())
}
