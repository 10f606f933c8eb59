//! Core domain types for tic-tac-toe.

use super::error::BoardParseError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Sign applied to utilities when scoring from this player's side.
    pub(crate) fn sign(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: copying one is a nine-byte memcpy and there is
/// no way to change a square in place, so sibling search branches can never
/// observe each other's moves. New boards come from [`Board::new`],
/// [`Board::from_squares`], parsing, or [`crate::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn marks(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns a copy of this board with `square` written at `pos`.
    pub(crate) fn with(mut self, pos: Position, square: Square) -> Self {
        self.squares[pos.index()] = square;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            write!(
                f,
                "{}|{}|{}",
                cells[0].symbol(),
                cells[1].symbol(),
                cells[2].symbol()
            )?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `-`, `_` and spaces are empty.
    /// Row separators `|`, `/` and line breaks are skipped, so both
    /// `"XO./.X./..O"` and the [`Display`](std::fmt::Display) output parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for (index, character) in s.chars().enumerate() {
            let square = match character {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | ' ' => Square::Empty,
                // The Display divider row is `-+-+-`; a lone dash is an empty cell.
                '-' if !s.contains('+') => Square::Empty,
                '|' | '/' | '\n' | '\r' | '-' | '+' => continue,
                _ => return Err(BoardParseError::InvalidCharacter { character, index }),
            };
            squares.push(square);
        }

        let found = squares.len();
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|_| BoardParseError::WrongCellCount { found })?;
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_marks() {
        let board: Board = "XO.X.....".parse().unwrap();
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
        assert_eq!(board.marks(), 3);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "X|O|.\n-+-+-\n.|X|.\n-+-+-\n.|.|O");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_dashes_are_empty_cells() {
        let board: Board = "X--------".parse().unwrap();
        assert_eq!(board.marks(), 1);
    }

    #[test]
    fn test_rejects_short_board() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongCellCount { found: 2 })
        );
    }

    #[test]
    fn test_rejects_unknown_character() {
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(BoardParseError::InvalidCharacter {
                character: 'Z',
                index: 2
            })
        );
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
