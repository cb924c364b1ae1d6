//! Line-oriented text protocol for driving the engine from another program.
//!
//! The framing follows the Go Text Protocol: each request is one line with
//! an optional numeric id, a command and its arguments. Each response is
//! `=id message` on success or `?id message` on failure, followed by a
//! blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version (2)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the program
//! - `clear_board` - Reset to the starting position
//! - `level <1-5>` - Set the computer's difficulty
//! - `play <color> <vertex|pass>` - Play a move, e.g. `play black c4`
//! - `genmove <color>` - Generate and play a move for the given color
//! - `valid_moves <color>` - List legal moves in board order
//! - `showboard` - Print the board
//! - `score` - Disc counts, and the winner once the game is over
//!
//! ## Example
//!
//! ```ignore
//! use othello_rust::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new(3)?;
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::ai::{Level, RandomSource, Searcher};
use crate::board::{Move, Player};
use crate::error::LevelError;
use crate::game::GameState;
use crate::rules::valid_moves;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "genmove",
    "known_command",
    "level",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "score",
    "showboard",
    "valid_moves",
    "version",
];

/// Protocol engine state.
pub struct ProtocolEngine<R = fastrand::Rng> {
    /// Current game
    game: GameState,
    /// Computer player used by `genmove`
    searcher: Searcher<R>,
}

impl ProtocolEngine<fastrand::Rng> {
    /// Create an engine playing at `level` (1 to 5).
    pub fn new(level: u8) -> Result<Self, LevelError> {
        Ok(Self::with_searcher(Searcher::new(Level::try_from(level)?)))
    }
}

impl<R: RandomSource> ProtocolEngine<R> {
    pub fn with_searcher(searcher: Searcher<R>) -> Self {
        Self {
            game: GameState::new(),
            searcher,
        }
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams until `quit` or EOF.
    pub fn serve<I: BufRead, O: Write>(&mut self, input: I, mut output: O) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, %message, "command failed");
            }
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    fn parse_color(args: &[&str]) -> Result<Player, String> {
        let arg = args.first().ok_or("missing argument")?;
        Player::parse(arg).ok_or_else(|| format!("invalid color: {arg}"))
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(command, ?args, "execute");
        let result = match command {
            "name" => Ok("othello-rust".to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => Ok("2".to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    Ok(known.to_string())
                }
                None => Err("missing argument".to_string()),
            },

            "quit" => Ok(String::new()),

            "clear_board" => {
                self.game = GameState::new();
                Ok(String::new())
            }

            "level" => self.level(args),

            "play" => self.play(args),

            "genmove" => self.genmove(args),

            "valid_moves" => Self::parse_color(args).map(|player| {
                valid_moves(self.game.board(), player)
                    .iter()
                    .map(Move::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            }),

            "showboard" => Ok(format!("\n{}", self.game.board().labeled())),

            "score" => {
                let (black, white) = self.game.score();
                let mut out = format!("black {black} white {white}");
                if self.game.is_over() {
                    match self.game.winner() {
                        Some(p) => out.push_str(&format!(" winner {}", p.name().to_lowercase())),
                        None => out.push_str(" draw"),
                    }
                }
                Ok(out)
            }

            _ => Err(format!("unknown command: {command}")),
        };
        match result {
            Ok(message) => (true, message),
            Err(message) => (false, message),
        }
    }

    fn level(&mut self, args: &[&str]) -> Result<String, String> {
        let arg = args.first().ok_or("missing argument")?;
        let n: i64 = arg.parse().map_err(|_| format!("invalid level: {arg}"))?;
        let level = Level::from_number(n).map_err(|e| e.to_string())?;
        self.searcher.set_level(level);
        Ok(String::new())
    }

    fn play(&mut self, args: &[&str]) -> Result<String, String> {
        if args.len() < 2 {
            return Err("missing arguments".to_string());
        }
        let player = Self::parse_color(args)?;
        if player != self.game.to_move() {
            return Err(format!("it is {}'s turn", self.game.to_move().name()));
        }
        let vertex = args[1].to_lowercase();
        if vertex == "pass" {
            return self.game.pass().map(|_| String::new()).map_err(|e| e.to_string());
        }
        let mv = Move::parse(&vertex).map_err(|e| e.to_string())?;
        self.game
            .play(mv.x, mv.y)
            .map(|_| String::new())
            .map_err(|e| e.to_string())
    }

    fn genmove(&mut self, args: &[&str]) -> Result<String, String> {
        let player = Self::parse_color(args)?;
        if player != self.game.to_move() {
            return Err(format!("it is {}'s turn", self.game.to_move().name()));
        }
        match self.game.play_ai(&mut self.searcher) {
            Ok(Some(mv)) => Ok(mv.to_string()),
            Ok(None) => Ok("pass".to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}
