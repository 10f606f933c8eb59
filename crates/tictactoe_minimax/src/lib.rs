//! Tic-tac-toe rules and exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over an immutable [`Board`]: whose turn it
//!   is, which moves are legal, what a move produces, who won.
//! - **Search**: full-depth minimax over the rules, returning the optimal
//!   move for the side to move.
//! - **Game**: a small driver bundling a board and its move history for
//!   front ends.
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{apply_move, best_move, is_terminal, utility, Board};
//!
//! let mut board = Board::new();
//! while let Some(mv) = best_move(&board) {
//!     board = apply_move(&board, mv).unwrap();
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
mod rules;
mod search;
mod types;

pub use error::{BoardParseError, GameError, IllegalMoveError, PositionParseError};
pub use game::Game;
pub use position::Position;
pub use rules::{
    apply_move, current_player, is_full, is_terminal, legal_moves, outcome, utility, winner,
    Outcome, LINES,
};
pub use search::{best_move, evaluate, principal_variation, Evaluation};
pub use types::{Board, Player, Square};

/// A move is the position the player to move marks.
pub type Move = Position;
