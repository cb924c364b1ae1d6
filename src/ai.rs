//! Computer opponent: move selection at five difficulty levels.
//!
//! - Level 1 picks uniformly among the legal moves.
//! - Level 2 is greedy: the move leaving the mover with the most discs.
//! - Levels 3 to 5 run a plain minimax search of depth 1 to 3 with the
//!   material difference as evaluation.
//!
//! Every level enumerates moves in [`valid_moves`] order and only replaces
//! its current best on a strict improvement, so ties go to the move found
//! first. Levels 2 to 5 are deterministic; level 1 draws from a
//! [`RandomSource`] so callers can seed or script it.

use std::fmt;

use tracing::debug;

use crate::board::{Board, Move, Player};
use crate::constants::{FIRST_MINIMAX_LEVEL, MAX_LEVEL, MAX_SEARCH_DEPTH, MIN_LEVEL};
use crate::error::LevelError;
use crate::rules::{play_legal, valid_moves};

/// A source of uniform random indices.
pub trait RandomSource {
    /// A uniformly chosen index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl RandomSource for fastrand::Rng {
    fn pick(&mut self, len: usize) -> usize {
        self.usize(0..len)
    }
}

/// Minimax search depth, always in `1..=MAX_SEARCH_DEPTH`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Depth(u8);

impl Depth {
    /// # Errors
    /// [`LevelError::DepthOutOfRange`] outside `1..=MAX_SEARCH_DEPTH`.
    pub fn new(plies: u8) -> Result<Depth, LevelError> {
        if (1..=MAX_SEARCH_DEPTH).contains(&plies) {
            Ok(Depth(plies))
        } else {
            Err(LevelError::DepthOutOfRange(plies))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Difficulty level of the computer opponent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    /// Level 1.
    Random,
    /// Level 2.
    Greedy,
    /// Levels 3 to 5, searching 1 to 3 plies.
    Minimax(Depth),
}

impl Level {
    /// Map a level number (1 to 5) to its strategy.
    ///
    /// # Errors
    /// [`LevelError::OutOfRange`] for any other number.
    pub fn from_number(n: i64) -> Result<Level, LevelError> {
        match n {
            1 => Ok(Level::Random),
            2 => Ok(Level::Greedy),
            n if (FIRST_MINIMAX_LEVEL as i64..=MAX_LEVEL as i64).contains(&n) => {
                Level::minimax((n - FIRST_MINIMAX_LEVEL as i64 + 1) as u8)
            }
            n => Err(LevelError::OutOfRange(n)),
        }
    }

    /// A minimax level searching `plies` deep.
    pub fn minimax(plies: u8) -> Result<Level, LevelError> {
        Depth::new(plies).map(Level::Minimax)
    }

    /// The level number (1 to 5).
    pub fn number(self) -> u8 {
        match self {
            Level::Random => MIN_LEVEL,
            Level::Greedy => MIN_LEVEL + 1,
            Level::Minimax(depth) => FIRST_MINIMAX_LEVEL + depth.get() - 1,
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Level::from_number(n as i64)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Random => write!(f, "level 1 (random)"),
            Level::Greedy => write!(f, "level 2 (greedy)"),
            Level::Minimax(depth) => {
                write!(f, "level {} (minimax depth {})", self.number(), depth.get())
            }
        }
    }
}

/// Material difference: `player`'s discs minus the opponent's.
pub fn evaluate_board(board: &Board, player: Player) -> i32 {
    board.count(player) as i32 - board.count(player.other()) as i32
}

/// Minimax search from `board` with `active` to move.
///
/// Scores are always from the perspective of the maximizing side, which is
/// `active` on maximizing plies and its opponent on minimizing plies.
/// Returns the score and the move chosen at this frame.
///
/// At depth 0, and whenever `active` has no legal move, the position is
/// scored directly and no move is returned; the search does not pass the
/// turn to the other side.
pub fn minimax(board: &Board, active: Player, depth: u8, maximizing: bool) -> (i32, Option<Move>) {
    let scorer = if maximizing { active } else { active.other() };
    if depth == 0 {
        return (evaluate_board(board, scorer), None);
    }
    let moves = valid_moves(board, active);
    if moves.is_empty() {
        return (evaluate_board(board, scorer), None);
    }

    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;
    for mv in moves {
        let child = play_legal(board, mv, active);
        let (score, _) = minimax(&child, active.other(), depth - 1, !maximizing);
        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(mv);
        }
    }
    (best_score, best_move)
}

fn random_move<R: RandomSource>(moves: &[Move], rng: &mut R) -> Move {
    moves[rng.pick(moves.len())]
}

/// The move leaving `player` with the most discs.
fn greedy_move(board: &Board, moves: &[Move], player: Player) -> Move {
    let mut best = moves[0];
    let mut best_count = 0;
    for &mv in moves {
        let count = play_legal(board, mv, player).count(player);
        if count > best_count {
            best_count = count;
            best = mv;
        }
    }
    best
}

/// Pick a move for `player` at `level`, or `None` when `player` must pass.
pub fn choose_move<R: RandomSource>(
    board: &Board,
    player: Player,
    level: Level,
    rng: &mut R,
) -> Option<Move> {
    let moves = valid_moves(board, player);
    if moves.is_empty() {
        return None;
    }
    match level {
        Level::Random => Some(random_move(&moves, rng)),
        Level::Greedy => Some(greedy_move(board, &moves, player)),
        Level::Minimax(depth) => minimax(board, player, depth.get(), true).1,
    }
}

/// Outcome of a [`Searcher::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move (`None` if the player must pass)
    pub best_move: Option<Move>,
    /// Material difference after the move (minimax levels: the search score)
    pub score: i32,
    /// Plies looked ahead (0 for random play)
    pub depth: u8,
}

/// A computer player: a difficulty level plus the random source level 1
/// draws from.
pub struct Searcher<R = fastrand::Rng> {
    level: Level,
    rng: R,
}

impl Searcher<fastrand::Rng> {
    /// A searcher seeded from the system.
    pub fn new(level: Level) -> Self {
        Self::with_rng(level, fastrand::Rng::new())
    }

    /// A searcher whose level-1 choices are reproducible.
    pub fn with_seed(level: Level, seed: u64) -> Self {
        Self::with_rng(level, fastrand::Rng::with_seed(seed))
    }
}

impl<R: RandomSource> Searcher<R> {
    pub fn with_rng(level: Level, rng: R) -> Self {
        Self { level, rng }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Choose a move for `player` and report how it scores.
    pub fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        let (best_move, score, depth) = match self.level {
            Level::Minimax(depth) => {
                let (score, mv) = minimax(board, player, depth.get(), true);
                (mv, score, depth.get())
            }
            level => {
                let mv = choose_move(board, player, level, &mut self.rng);
                let after = mv.map_or(*board, |m| play_legal(board, m, player));
                let depth = if level == Level::Greedy { 1 } else { 0 };
                (mv, evaluate_board(&after, player), depth)
            }
        };
        match best_move {
            Some(mv) => debug!(%mv, score, player = player.name(), level = %self.level, "search"),
            None => debug!(player = player.name(), level = %self.level, "no legal move, pass"),
        }
        SearchResult {
            best_move,
            score,
            depth,
        }
    }
}
