//! Game driver for tic-tac-toe.
//!
//! `Game` packages the contract a front end has with the engine: keep a
//! board, apply validated moves, ask for the engine's move, and notice when
//! the game ends. The board is replaced on every move, never edited.

use super::error::GameError;
use super::rules::{apply_move, current_player, outcome, Outcome};
use super::search::best_move;
use super::{Board, Move, Player};
use tracing::{debug, info, instrument};

/// A game in progress or finished, with the moves that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game on the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Resumes play from an arbitrary board. History starts empty.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played through this driver.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        current_player(&self.board)
    }

    /// Returns the game status.
    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    /// Plays `mv` for the player to move.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once the game has ended, and
    /// [`GameError::IllegalMove`] if the square is taken.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn play(&mut self, mv: Move) -> Result<Outcome, GameError> {
        if self.outcome().is_over() {
            return Err(GameError::GameOver);
        }

        self.board = apply_move(&self.board, mv)?;
        self.history.push(mv);
        debug!(position = %mv, "Move played");

        let status = self.outcome();
        if status.is_over() {
            info!(outcome = %status, moves = self.history.len(), "Game finished");
        }
        Ok(status)
    }

    /// Plays the engine's move for the side to move.
    ///
    /// Returns `Ok(None)` when the game is already over.
    #[instrument(skip(self))]
    pub fn play_best(&mut self) -> Result<Option<Move>, GameError> {
        match best_move(&self.board) {
            Some(mv) => {
                self.play(mv)?;
                Ok(Some(mv))
            }
            None => Ok(None),
        }
    }

    /// Lets the engine play both sides to the end.
    #[instrument(skip(self))]
    pub fn play_out(&mut self) -> Result<Outcome, GameError> {
        while self.play_best()?.is_some() {}
        Ok(self.outcome())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
