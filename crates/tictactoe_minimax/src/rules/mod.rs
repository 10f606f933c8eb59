//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Nothing here mutates its input: every question is
//! answered from the board alone, including whose turn it is.

pub mod draw;
pub mod moves;
pub mod outcome;
pub mod turn;
pub mod win;

pub use draw::{is_full, is_terminal};
pub use moves::{apply_move, legal_moves};
pub use outcome::{outcome, utility, Outcome};
pub use turn::current_player;
pub use win::{winner, LINES};
