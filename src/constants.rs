//! Board geometry, difficulty bounds and default settings.
//!
//! Othello is always played on an 8x8 board, so unlike engines for games
//! with several standard sizes there is no feature switch here.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 8;

/// Number of cells on the board.
pub const CELLS: usize = N * N;

/// The 8 compass offsets `(dx, dy)`, scanned in this order by both the
/// legality check and flip resolution.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Column letters used by the algebraic notation (`a` is x = 0).
pub const COLUMNS: &str = "abcdefgh";

// =============================================================================
// Difficulty
// =============================================================================

/// Weakest difficulty level (uniform random play).
pub const MIN_LEVEL: u8 = 1;

/// Strongest difficulty level (minimax to `MAX_SEARCH_DEPTH`).
pub const MAX_LEVEL: u8 = 5;

/// Level used when the caller does not pick one.
pub const DEFAULT_LEVEL: u8 = 3;

/// First level that runs a minimax search; level `FIRST_MINIMAX_LEVEL + k`
/// searches `k + 1` plies.
pub const FIRST_MINIMAX_LEVEL: u8 = 3;

/// Deepest search any level performs.
pub const MAX_SEARCH_DEPTH: u8 = MAX_LEVEL - FIRST_MINIMAX_LEVEL + 1;

// =============================================================================
// Self-play
// =============================================================================

/// Upper bound on plies in a game: every move fills one of the 60 free cells.
pub const MAX_GAME_LEN: usize = CELLS - 4;
