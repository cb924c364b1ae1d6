//! Othello rules: legality, move application and game-end detection.
//!
//! All functions are pure. They take a board by reference and return a
//! verdict or a new board; the caller's board is never altered.
//!
//! Legality and flipping share one primitive, `capture_run`, which walks
//! outward from the placed disc in one direction over a contiguous run of
//! opponent discs and reports how long that run is when it is closed by one
//! of the mover's discs. A run of length zero is not a capture.

use tracing::trace;

use crate::board::{Board, Cell, Move, Player};
use crate::constants::{DIRECTIONS, N};
use crate::error::MoveError;

/// Step from `(x, y)` by `(dx, dy)`, returning `None` off the board.
#[inline]
fn step(x: usize, y: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    (nx < N && ny < N).then_some((nx, ny))
}

/// Length of the opponent run bracketed in direction `(dx, dy)` from `(x, y)`.
///
/// Returns 0 when the run is empty, runs off the board, or hits an empty cell
/// before a disc of `player`.
fn capture_run(board: &Board, x: usize, y: usize, dx: isize, dy: isize, player: Player) -> usize {
    let own = player.to_cell();
    let opp = player.other().to_cell();
    let mut run = 0;
    let (mut cx, mut cy) = (x, y);
    while let Some((nx, ny)) = step(cx, cy, dx, dy) {
        match board.get(nx, ny) {
            Some(c) if c == opp => run += 1,
            Some(c) if c == own => return run,
            _ => return 0,
        }
        cx = nx;
        cy = ny;
    }
    0
}

/// Whether `player` may place a disc at `(x, y)`.
///
/// The target must be on the board and empty, and at least one of the 8
/// directions must bracket one or more opponent discs.
pub fn is_legal_move(board: &Board, x: usize, y: usize, player: Player) -> bool {
    if board.get(x, y) != Some(Cell::Empty) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dx, dy)| capture_run(board, x, y, dx, dy, player) > 0)
}

/// The discs that placing at `(x, y)` would flip, direction by direction.
///
/// Empty when the move is illegal.
pub fn flips(board: &Board, x: usize, y: usize, player: Player) -> Vec<Move> {
    let mut out = Vec::new();
    if board.get(x, y) != Some(Cell::Empty) {
        return out;
    }
    for &(dx, dy) in &DIRECTIONS {
        let run = capture_run(board, x, y, dx, dy, player);
        let (mut cx, mut cy) = (x, y);
        for _ in 0..run {
            // The run was just walked, so every step stays on the board.
            if let Some((nx, ny)) = step(cx, cy, dx, dy) {
                out.push(Move::new(nx, ny));
                cx = nx;
                cy = ny;
            }
        }
    }
    out
}

/// Place `player`'s disc at `(x, y)` and flip every bracketed opponent disc.
///
/// Illegal moves are rejected; the degenerate "place without flipping"
/// board is never produced.
///
/// # Errors
/// - [`MoveError::OutOfBounds`] if the coordinate is off the board
/// - [`MoveError::Occupied`] if the cell already holds a disc
/// - [`MoveError::NoCapture`] if no direction brackets an opponent disc
pub fn apply_move(board: &Board, x: usize, y: usize, player: Player) -> Result<Board, MoveError> {
    let mv = Move::new(x, y);
    match board.get(x, y) {
        None => return Err(MoveError::OutOfBounds { x, y }),
        Some(Cell::Empty) => {}
        Some(_) => return Err(MoveError::Occupied(mv)),
    }
    let flipped = flips(board, x, y, player);
    if flipped.is_empty() {
        return Err(MoveError::NoCapture(mv));
    }
    trace!(%mv, player = player.name(), flipped = flipped.len(), "apply move");
    Ok(place(board, mv, &flipped, player))
}

/// Write the placed disc and its flips into a copy of `board`.
fn place(board: &Board, mv: Move, flipped: &[Move], player: Player) -> Board {
    let cell = player.to_cell();
    flipped
        .iter()
        .fold(board.with_cell(mv.x, mv.y, cell), |b, f| {
            b.with_cell(f.x, f.y, cell)
        })
}

/// Apply a move already known to be legal, e.g. one taken from
/// [`valid_moves`]. Used by the search, which never feeds illegal moves.
pub(crate) fn play_legal(board: &Board, mv: Move, player: Player) -> Board {
    let flipped = flips(board, mv.x, mv.y, player);
    debug_assert!(!flipped.is_empty(), "play_legal called with illegal move {mv}");
    place(board, mv, &flipped, player)
}

/// All legal moves for `player`, in row-major order (y outer, x inner).
///
/// The order is part of the contract: random selection and every
/// tie-break in the AI depend on it.
pub fn valid_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::with_capacity(N * N);
    for y in 0..N {
        for x in 0..N {
            if is_legal_move(board, x, y, player) {
                moves.push(Move::new(x, y));
            }
        }
    }
    moves
}

/// Whether `player` has at least one legal move.
pub fn has_valid_move(board: &Board, player: Player) -> bool {
    (0..N).any(|y| (0..N).any(|x| is_legal_move(board, x, y, player)))
}

/// The game ends when neither side can move.
pub fn is_game_over(board: &Board) -> bool {
    !has_valid_move(board, Player::Black) && !has_valid_move(board, Player::White)
}

/// The side with more discs, or `None` on a tie.
pub fn winner(board: &Board) -> Option<Player> {
    let black = board.count(Player::Black);
    let white = board.count(Player::White);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Some(Player::Black),
        std::cmp::Ordering::Less => Some(Player::White),
        std::cmp::Ordering::Equal => None,
    }
}
