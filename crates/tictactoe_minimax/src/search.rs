//! Exhaustive minimax search.
//!
//! X maximizes the utility, O minimizes it. Every call walks the complete
//! game tree below the given board with no pruning and no memo table, so no
//! state survives between calls and the functions here are safe to call from
//! any number of threads at once.
//!
//! # Tie-break
//!
//! Several moves often share the optimal score. The side to move then
//! prefers the quicker win (or, when every move loses, the slowest loss).
//! Anything still tied goes to the first move in [`legal_moves`] order,
//! which is row-major. The choice is deterministic but carries no game
//! meaning beyond always taking an immediate win.

use super::rules::{apply_move, current_player, is_terminal, legal_moves, utility};
use super::{Board, Move, Player};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Result of searching a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    /// Minimax value from X's side (+1, 0 or -1).
    pub score: i32,
    /// Length of the optimal line from this board to the end of the game.
    pub plies: u32,
    /// Move that starts the optimal line; `None` on terminal boards.
    pub best: Option<Move>,
}

impl Evaluation {
    fn terminal(board: &Board) -> Self {
        Self {
            score: utility(board),
            plies: 0,
            best: None,
        }
    }

    /// Ranking key for `player`; larger is better.
    fn preference(&self, player: Player) -> (i32, i64) {
        let score = self.score * player.sign();
        let plies = i64::from(self.plies);
        let tempo = match score.cmp(&0) {
            Ordering::Greater => -plies,
            Ordering::Less => plies,
            Ordering::Equal => 0,
        };
        (score, tempo)
    }
}

/// Searches the full tree below `board`.
///
/// On a terminal board the evaluation carries the utility, zero plies and
/// no move.
#[instrument(level = "debug", skip(board), fields(to_move = %current_player(board)))]
pub fn evaluate(board: &Board) -> Evaluation {
    let evaluation = match current_player(board) {
        Player::X => max_value(*board),
        Player::O => min_value(*board),
    };
    debug!(
        score = evaluation.score,
        plies = evaluation.plies,
        best = ?evaluation.best,
        "Search complete"
    );
    evaluation
}

/// Returns the optimal move for the player to move, or `None` if the game
/// is over.
pub fn best_move(board: &Board) -> Option<Move> {
    if is_terminal(board) {
        return None;
    }
    evaluate(board).best
}

/// Plays [`best_move`] for both sides until the game ends and returns the
/// moves in order. Empty for a terminal board.
#[instrument(level = "debug", skip(board))]
pub fn principal_variation(board: &Board) -> Vec<Move> {
    let mut line = Vec::new();
    let mut current = *board;
    while let Some(mv) = best_move(&current) {
        current = apply_move(&current, mv).expect("best_move only returns empty squares");
        line.push(mv);
    }
    line
}

fn max_value(board: Board) -> Evaluation {
    if is_terminal(&board) {
        return Evaluation::terminal(&board);
    }
    choose(board, Player::X, min_value)
}

fn min_value(board: Board) -> Evaluation {
    if is_terminal(&board) {
        return Evaluation::terminal(&board);
    }
    choose(board, Player::O, max_value)
}

/// Scores every legal move with `reply` and keeps the best one for `player`.
fn choose(board: Board, player: Player, reply: fn(Board) -> Evaluation) -> Evaluation {
    let mut chosen: Option<Evaluation> = None;

    for mv in legal_moves(&board) {
        let next = apply_move(&board, mv).expect("legal_moves only yields empty squares");
        let child = reply(next);
        let candidate = Evaluation {
            score: child.score,
            plies: child.plies + 1,
            best: Some(mv),
        };

        // Strict comparison keeps the earliest move among equals.
        if chosen.is_none_or(|best| candidate.preference(player) > best.preference(player)) {
            chosen = Some(candidate);
        }
    }

    // Non-terminal boards always have a legal move.
    chosen.unwrap_or_else(|| Evaluation::terminal(&board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_terminal_board_has_no_move() {
        let won: Board = "XXXOO....".parse().unwrap();
        let drawn: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(best_move(&won), None);
        assert_eq!(best_move(&drawn), None);
    }

    #[test]
    fn test_terminal_evaluation() {
        let won: Board = "XX.OOOX..".parse().unwrap();
        assert_eq!(
            evaluate(&won),
            Evaluation {
                score: -1,
                plies: 0,
                best: None
            }
        );
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X . / O O . / . . .
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(best_move(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_prefers_quicker_win() {
        // X O . / O X . / . . .
        // TopRight forks for a win in three plies; BottomRight wins now.
        let board: Board = "XO.OX....".parse().unwrap();
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.best, Some(Position::BottomRight));
        assert_eq!(evaluation.score, 1);
        assert_eq!(evaluation.plies, 1);
    }

    #[test]
    fn test_x_blocks_threat() {
        // O O . / . X . / . X .
        let board: Board = "OO..X..X.".parse().unwrap();
        assert_eq!(best_move(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_o_blocks_threat() {
        // X . . / X O . / . . .
        let board: Board = "X..XO....".parse().unwrap();
        assert_eq!(best_move(&board), Some(Position::BottomLeft));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // X X . / O O . / X . .
        let board: Board = "XX.OO.X..".parse().unwrap();
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.best, Some(Position::MiddleRight));
        assert_eq!(evaluation.score, -1);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let evaluation = evaluate(&Board::new());
        assert_eq!(evaluation.score, 0);
        assert_eq!(evaluation.plies, 9);
        let mv = evaluation.best.unwrap();
        assert!(mv.is_corner() || mv.is_center());
    }

    #[test]
    fn test_principal_variation_ends_the_game() {
        let board: Board = "XO.OX....".parse().unwrap();
        assert_eq!(principal_variation(&board), vec![Position::BottomRight]);
        assert!(principal_variation(&"XXXOO....".parse().unwrap()).is_empty());
    }
}
