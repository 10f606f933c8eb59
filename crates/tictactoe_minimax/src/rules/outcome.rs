//! Numeric and categorical results of a board.

use super::super::{Board, Player};
use super::draw::is_full;
use super::win::winner;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a board, always recomputed from its squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
    /// Game is ongoing.
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}

/// Classifies the board.
#[instrument(level = "trace", ret)]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Won(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// Scores a board from X's side: +1 X won, -1 O won, 0 otherwise.
///
/// Only meaningful on terminal boards; a game still in progress also
/// reads 0.
#[instrument(level = "trace", ret)]
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
