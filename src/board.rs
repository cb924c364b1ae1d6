//! Board representation: cells, players, moves and the immutable 8x8 grid.
//!
//! A [`Board`] is a small `Copy` value. Nothing in the crate mutates a board
//! that a caller handed in; every change produces a new board.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CELLS, COLUMNS, N};
use crate::error::BoardParseError;

/// Contents of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The player owning a disc in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Black => 'X',
            Cell::White => 'O',
            Cell::Empty => '.',
        }
    }
}

/// One of the two sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell value of this player's discs.
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }

    /// Parse a color as used by text protocols: `b`, `black`, `w`, `white`.
    pub fn parse(s: &str) -> Option<Player> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Some(Player::Black),
            "w" | "white" => Some(Player::White),
            _ => None,
        }
    }
}

/// A placement at column `x`, row `y`. The acting player is implicit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub x: usize,
    pub y: usize,
}

impl Move {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates lie on the board.
    #[inline]
    pub fn on_board(self) -> bool {
        self.x < N && self.y < N
    }

    /// Parse algebraic notation such as `c4` (column letter, row number).
    pub fn parse(s: &str) -> Result<Move, BoardParseError> {
        let bad = || BoardParseError::BadCoord(s.to_string());
        let s_lower = s.trim().to_ascii_lowercase();
        let mut chars = s_lower.chars();
        let col = chars.next().ok_or_else(bad)?;
        let x = COLUMNS.find(col).ok_or_else(bad)?;
        let row: usize = chars.as_str().parse().map_err(|_| bad())?;
        if row == 0 || row > N {
            return Err(bad());
        }
        Ok(Move::new(x, row - 1))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match COLUMNS.chars().nth(self.x) {
            Some(col) if self.y < N => write!(f, "{col}{}", self.y + 1),
            _ => write!(f, "{},{}", self.x, self.y),
        }
    }
}

/// An 8x8 Othello board, stored row-major (`y * N + x`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position: White on d4/e5, Black on e4/d5.
    pub fn new() -> Self {
        let mid = N / 2;
        Self::empty()
            .with_cell(mid - 1, mid - 1, Cell::White)
            .with_cell(mid, mid, Cell::White)
            .with_cell(mid, mid - 1, Cell::Black)
            .with_cell(mid - 1, mid, Cell::Black)
    }

    /// A board with no discs at all.
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    #[inline]
    fn idx(x: usize, y: usize) -> usize {
        y * N + x
    }

    /// The cell at `(x, y)`, or `None` when the coordinate is off the board.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= N || y >= N {
            return None;
        }
        Some(self.cells[Self::idx(x, y)])
    }

    /// A copy of this board with `(x, y)` set to `cell`.
    /// Off-board coordinates leave the copy unchanged.
    pub fn with_cell(mut self, x: usize, y: usize, cell: Cell) -> Self {
        if x < N && y < N {
            self.cells[Self::idx(x, y)] = cell;
        }
        self
    }

    /// Number of discs `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        let cell = player.to_cell();
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Render the board with column letters and row numbers.
    pub fn labeled(&self) -> String {
        let mut out = String::from("  ");
        for col in COLUMNS.chars() {
            out.push(col);
            out.push(' ');
        }
        out.push('\n');
        for y in 0..N {
            out.push_str(&format!("{} ", y + 1));
            for x in 0..N {
                out.push(self.cells[Self::idx(x, y)].symbol());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..N {
            for x in 0..N {
                let ch = self.cells[Self::idx(x, y)].symbol();
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse 64 cell symbols (`X` Black, `O` White, `.` Empty) in row-major
    /// order. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELLS];
        let mut found = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch {
                'X' | 'x' => Cell::Black,
                'O' | 'o' => Cell::White,
                '.' => Cell::Empty,
                other => return Err(BoardParseError::BadCell(other)),
            };
            if found < CELLS {
                cells[found] = cell;
            }
            found += 1;
        }
        if found != CELLS {
            return Err(BoardParseError::WrongCellCount {
                expected: CELLS,
                found,
            });
        }
        Ok(Board { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_layout() {
        let board = Board::new();
        assert_eq!(board.get(3, 3), Some(Cell::White));
        assert_eq!(board.get(4, 4), Some(Cell::White));
        assert_eq!(board.get(4, 3), Some(Cell::Black));
        assert_eq!(board.get(3, 4), Some(Cell::Black));
        assert_eq!(board.count(Player::Black), 2);
        assert_eq!(board.count(Player::White), 2);
        assert_eq!(board.count_empty(), 60);
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::new();
        assert_eq!(board.get(8, 0), None);
        assert_eq!(board.get(0, 8), None);
        assert_eq!(board.get(usize::MAX, 3), None);
    }

    #[test]
    fn test_with_cell_returns_copy() {
        let board = Board::empty();
        let next = board.with_cell(0, 0, Cell::Black);
        assert_eq!(board.get(0, 0), Some(Cell::Empty));
        assert_eq!(next.get(0, 0), Some(Cell::Black));
        assert_eq!(board.with_cell(9, 9, Cell::White), board);
    }

    #[test]
    fn test_player_other_and_cells() {
        assert_eq!(Player::Black.other(), Player::White);
        assert_eq!(Player::White.other(), Player::Black);
        assert_eq!(Player::Black.to_cell().player(), Some(Player::Black));
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Player::parse("W"), Some(Player::White));
        assert_eq!(Player::parse("black"), Some(Player::Black));
        assert_eq!(Player::parse("red"), None);
    }

    #[test]
    fn test_move_notation() {
        assert_eq!(Move::new(2, 3).to_string(), "c4");
        assert_eq!(Move::new(7, 7).to_string(), "h8");
        assert_eq!(Move::new(8, 1).to_string(), "8,1");
        assert!(Move::new(7, 0).on_board());
        assert!(!Move::new(8, 1).on_board());
        assert_eq!(Move::parse("C4"), Ok(Move::new(2, 3)));
        assert_eq!(Move::parse("a1"), Ok(Move::new(0, 0)));
        assert!(Move::parse("i1").is_err());
        assert!(Move::parse("a9").is_err());
        assert!(Move::parse("a0").is_err());
        assert!(Move::parse("").is_err());
    }

    #[test]
    fn test_display_and_parse_agree() {
        let board = Board::new().with_cell(0, 7, Cell::Black);
        let text = board.to_string();
        let parsed: Board = text.parse().expect("board text should parse");
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "X O .".parse::<Board>(),
            Err(BoardParseError::WrongCellCount {
                expected: 64,
                found: 3
            })
        );
        let mut text = ".".repeat(63);
        text.push('#');
        assert_eq!(text.parse::<Board>(), Err(BoardParseError::BadCell('#')));
    }

    #[test]
    fn test_labeled_has_headers() {
        let labeled = Board::new().labeled();
        let mut lines = labeled.lines();
        assert_eq!(lines.next(), Some("  a b c d e f g h "));
        assert_eq!(lines.nth(3), Some("4 . . . O X . . . "));
    }
}
