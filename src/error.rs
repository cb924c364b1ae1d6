//! Structured error types for the rules engine, the AI and the game session.

use crate::board::{Move, Player};
use crate::constants::{MAX_LEVEL, MAX_SEARCH_DEPTH, MIN_LEVEL};

/// Why a move could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move {x},{y}: off the board")]
    OutOfBounds { x: usize, y: usize },

    #[error("illegal move {0}: point not empty")]
    Occupied(Move),

    #[error("illegal move {0}: captures no discs")]
    NoCapture(Move),
}

/// Difficulty level or search depth outside the supported range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("invalid level {0}: expected {min} to {max}", min = MIN_LEVEL, max = MAX_LEVEL)]
    OutOfRange(i64),

    #[error("invalid search depth {0}: expected 1 to {max}", max = MAX_SEARCH_DEPTH)]
    DepthOutOfRange(u8),
}

/// Errors raised by a [`crate::game::GameState`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,

    #[error("{} has a legal move and cannot pass", .0.name())]
    PassNotAllowed(Player),

    #[error("it is not {}'s turn", .0.name())]
    WrongPlayer(Player),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors raised when reading a board or a coordinate from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected {expected} cells, found {found}")]
    WrongCellCount { expected: usize, found: usize },

    #[error("unexpected character {0:?} in board")]
    BadCell(char),

    #[error("invalid coordinate {0:?}")]
    BadCoord(String),
}
