//! Turn order derived from the marks on the board.

use super::super::{Board, Player};
use tracing::instrument;

/// Returns the player whose turn it is.
///
/// X moves whenever it has no more marks than O, so the empty board belongs
/// to X. There is no stored turn field; the mark counts are the only source
/// of truth.
#[instrument(level = "trace", ret)]
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) <= board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_x() {
        assert_eq!(current_player(&Board::new()), Player::X);
    }

    #[test]
    fn test_x_ahead_is_o() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(current_player(&board), Player::O);
    }

    #[test]
    fn test_equal_counts_is_x() {
        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(current_player(&board), Player::X);
    }

    #[test]
    fn test_o_ahead_is_x() {
        // Unreachable in play, but the count rule still answers.
        let board: Board = "OO.......".parse().unwrap();
        assert_eq!(current_player(&board), Player::X);
    }
}
