//! Error types for rules, the game driver and board parsing.

use super::{Player, Position};
use derive_more::{Display, Error};

/// A mark was placed on a square that already holds one.
///
/// Callers are expected to draw moves from [`crate::legal_moves`]; seeing this
/// error means that contract was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Illegal move: {} is already occupied by {}", position, occupant)]
pub struct IllegalMoveError {
    /// Where the mark was attempted.
    pub position: Position,
    /// Who already holds that square.
    pub occupant: Player,
}

/// Error returned by [`crate::Game`] when a move cannot be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted square is occupied.
    #[display("{}", _0)]
    IllegalMove(IllegalMoveError),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl From<IllegalMoveError> for GameError {
    fn from(err: IllegalMoveError) -> Self {
        Self::IllegalMove(err)
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", found)]
    WrongCellCount {
        /// Number of cells found.
        found: usize,
    },

    /// A character is neither a mark, an empty cell, nor a separator.
    #[display("Invalid character {:?} at offset {}", character, index)]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character offset in the input.
        index: usize,
    },
}

/// Error parsing a position from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid position {:?}: expected an index 0-8, \"row,col\" or a label", input)]
pub struct PositionParseError {
    /// The rejected input.
    pub input: String,
}
