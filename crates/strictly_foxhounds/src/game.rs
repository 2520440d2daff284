//! Whole-game state machine.
//!
//! `InProgress` is the only state that accepts moves. Every applied move
//! hands the turn to the other side and re-evaluates the status; `FoxWins`
//! and `HoundsWin` are terminal.

use super::action::{Move, MoveError};
use super::board::BoardState;
use super::coord::Position;
use super::error::ContractError;
use super::persistence::{load_game, save_game, LoadFailure};
use super::rules::{broken_rule, evaluate};
use super::types::{Figure, GameStatus};
use std::path::Path;
use tracing::{info, instrument};

/// A game of fox and hounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: BoardState,
    to_move: Figure,
    status: GameStatus,
}

impl Game {
    /// Starts a new game on a board of the given size. The fox moves first.
    ///
    /// # Errors
    ///
    /// Returns a contract error if the dimension is outside `[4, 26]`.
    #[instrument]
    pub fn new(dimension: usize) -> Result<Self, ContractError> {
        Ok(Self::from_parts(BoardState::initial_layout(dimension)?, Figure::Fox))
    }

    /// Resumes a game from an existing board.
    #[instrument(skip(board))]
    pub fn from_parts(board: BoardState, to_move: Figure) -> Self {
        let status = evaluate(&board);
        Self {
            board,
            to_move,
            status,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Figure {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves a figure of the side to move from `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended and
    /// [`MoveError::IllegalMove`] if the move breaks a movement rule; the
    /// game is unchanged in both cases.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(&mut self, origin: Position, destination: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver(self.status));
        }

        let mv = Move::new(self.to_move, origin, destination);
        if let Some(rule) = broken_rule(&self.board, &mv) {
            return Err(MoveError::IllegalMove { mv, rule });
        }

        self.board.apply_move(&mv);
        self.status = evaluate(&self.board);
        self.to_move = self.to_move.opponent();

        if self.status.is_over() {
            info!(status = %self.status, "Game over");
        }
        Ok(self.status)
    }

    /// Saves the board with the side to move as next mover.
    ///
    /// # Errors
    ///
    /// See [`save_game`].
    #[instrument(skip(self))]
    pub fn save(&self, path: &Path) -> Result<bool, ContractError> {
        save_game(&self.board, self.to_move, path)
    }

    /// Replaces board and side to move with a saved game.
    ///
    /// Nothing changes unless the whole file loads.
    ///
    /// # Errors
    ///
    /// See [`load_game`].
    #[instrument(skip(self))]
    pub fn load(&mut self, path: &Path) -> Result<Figure, LoadFailure> {
        let (board, next_mover) = load_game(path)?.into_parts();
        *self = Self::from_parts(board, next_mover);
        Ok(next_mover)
    }
}
