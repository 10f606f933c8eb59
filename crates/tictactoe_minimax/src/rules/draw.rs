//! Full-board and end-of-game detection.

use super::super::{Board, Square};
use super::win::winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace", ret)]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game is over: someone has a line or no square is left.
#[instrument(level = "trace", ret)]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}
