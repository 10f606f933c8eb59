//! Move generation and application.

use super::super::error::IllegalMoveError;
use super::super::{Board, Move, Position, Square};
use super::turn::current_player;
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns every empty position on the board.
///
/// The set iterates in row-major order. It is empty exactly when the board
/// is full.
#[instrument(level = "trace", skip(board))]
pub fn legal_moves(board: &Board) -> BTreeSet<Move> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

/// Returns the board that results from the player to move marking `mv`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`IllegalMoveError`] if the square is already occupied.
#[instrument(level = "trace", skip(board), fields(position = %mv))]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, IllegalMoveError> {
    match board.get(mv) {
        Square::Occupied(occupant) => Err(IllegalMoveError {
            position: mv,
            occupant,
        }),
        Square::Empty => Ok(board.with(mv, Square::Occupied(current_player(board)))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_board_has_nine_moves() {
        let moves = legal_moves(&Board::new());
        assert_eq!(moves.len(), 9);
        assert!(moves.iter().copied().eq(Position::ALL));
    }

    #[test]
    fn test_occupied_squares_are_excluded() {
        let board: Board = "X...O....".parse().unwrap();
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Position::TopLeft));
        assert!(!moves.contains(&Position::Center));
        assert!(moves.contains(&Position::BottomRight));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert!(legal_moves(&board).is_empty());
    }

    #[test]
    fn test_apply_marks_current_player() {
        let board = Board::new();
        let after_x = apply_move(&board, Position::Center).unwrap();
        assert_eq!(after_x.get(Position::Center), Square::Occupied(Player::X));

        let after_o = apply_move(&after_x, Position::TopLeft).unwrap();
        assert_eq!(after_o.get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let board: Board = "X...O....".parse().unwrap();
        let snapshot = board;
        let _ = apply_move(&board, Position::BottomRight).unwrap();
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_occupied_square_is_rejected() {
        let board = apply_move(&Board::new(), Position::Center).unwrap();
        let err = apply_move(&board, Position::Center).unwrap_err();
        assert_eq!(
            err,
            IllegalMoveError {
                position: Position::Center,
                occupant: Player::X,
            }
        );
    }
}
