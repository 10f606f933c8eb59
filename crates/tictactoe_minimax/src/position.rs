//! Named cells of the tic-tac-toe board.

use super::error::PositionParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A position on the tic-tac-toe board.
///
/// Variants are declared in row-major order, so the derived ordering walks
/// the board left to right, top to bottom. A move is nothing more than the
/// position a mark goes on; see [`crate::Move`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 0, column 0)
    TopLeft,
    /// Top-center (row 0, column 1)
    TopCenter,
    /// Top-right (row 0, column 2)
    TopRight,
    /// Middle-left (row 1, column 0)
    MiddleLeft,
    /// Center (row 1, column 1)
    Center,
    /// Middle-right (row 1, column 2)
    MiddleRight,
    /// Bottom-left (row 2, column 0)
    BottomLeft,
    /// Bottom-center (row 2, column 1)
    BottomCenter,
    /// Bottom-right (row 2, column 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from zero-based coordinates.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// True for the four corner cells.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopRight | Position::BottomLeft | Position::BottomRight
        )
    }

    /// True for the middle cell.
    pub fn is_center(self) -> bool {
        self == Position::Center
    }

    /// True for the four edge cells between corners.
    pub fn is_edge(self) -> bool {
        !self.is_corner() && !self.is_center()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    /// Accepts a board index (`4`), coordinates (`1,1`), or a label (`center`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let parsed = if let Ok(index) = trimmed.parse::<usize>() {
            Self::from_index(index)
        } else if let Some((row, col)) = trimmed.split_once(',') {
            match (row.trim().parse::<usize>(), col.trim().parse::<usize>()) {
                (Ok(row), Ok(col)) => Self::from_coords(row, col),
                _ => None,
            }
        } else {
            <Position as strum::IntoEnumIterator>::iter()
                .find(|pos| pos.label().eq_ignore_ascii_case(trimmed))
        };

        parsed.ok_or_else(|| PositionParseError {
            input: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for pos in Position::ALL {
            assert_eq!(Position::from_index(pos.index()), Some(pos));
            assert_eq!(Position::from_coords(pos.row(), pos.col()), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::from_coords(0, 3), None);
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(Position::TopRight.row(), 0);
        assert_eq!(Position::TopRight.col(), 2);
        assert_eq!(Position::BottomCenter.row(), 2);
        assert_eq!(Position::BottomCenter.col(), 1);
    }

    #[test]
    fn test_classification() {
        let corners = Position::ALL.iter().filter(|p| p.is_corner()).count();
        let edges = Position::ALL.iter().filter(|p| p.is_edge()).count();
        assert_eq!(corners, 4);
        assert_eq!(edges, 4);
        assert!(Position::Center.is_center());
        assert!(!Position::Center.is_edge());
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("4".parse::<Position>(), Ok(Position::Center));
        assert_eq!("2, 0".parse::<Position>(), Ok(Position::BottomLeft));
        assert_eq!("top-right".parse::<Position>(), Ok(Position::TopRight));
        assert!("9".parse::<Position>().is_err());
        assert!("3,3".parse::<Position>().is_err());
        assert_eq!(
            "middle".parse::<Position>(),
            Err(PositionParseError {
                input: "middle".to_string()
            })
        );
    }
}
