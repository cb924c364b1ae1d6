//! Othello-Rust: an Othello (Reversi) rules engine and computer opponent.
//!
//! The engine is pure: every operation takes a board snapshot and returns a
//! verdict, a new board, or a chosen move. Turn order, rendering and input
//! belong to the caller; [`game`] and [`protocol`] provide one such caller.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, directions and difficulty bounds
//! - [`board`] - Cells, players, moves and the immutable 8x8 board
//! - [`rules`] - Legal moves, move application with flips, game end
//! - [`ai`] - Random, greedy and minimax move selection (levels 1 to 5)
//! - [`game`] - Turn alternation and forced passes
//! - [`protocol`] - Text protocol server for GUI integration
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use othello_rust::ai::{choose_move, Level};
//! use othello_rust::board::{Board, Player};
//! use othello_rust::rules::{apply_move, is_legal_move};
//!
//! let board = Board::new();
//! assert!(is_legal_move(&board, 2, 3, Player::Black));
//! let board = apply_move(&board, 2, 3, Player::Black).unwrap();
//!
//! let mut rng = fastrand::Rng::with_seed(1);
//! let reply = choose_move(&board, Player::White, Level::minimax(3).unwrap(), &mut rng);
//! println!("White replies {}", reply.unwrap());
//! ```

pub mod ai;
pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod protocol;
pub mod rules;
