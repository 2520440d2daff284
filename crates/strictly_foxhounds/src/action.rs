//! First-class move types.
//!
//! A move is the player's intent. It is validated by the movement rules
//! before the board ever sees it.

use super::coord::{parse_position, Position};
use super::error::ContractError;
use super::rules::MoveRule;
use super::types::{Figure, GameStatus};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A figure stepping from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The kind of figure being moved.
    pub figure: Figure,
    /// Square the figure starts on.
    pub origin: Position,
    /// Square the figure ends on.
    pub destination: Position,
}

impl Move {
    /// Builds a move from notation such as `"B1"`, `"C2"`.
    ///
    /// # Errors
    ///
    /// Returns a contract error if either square is malformed.
    #[instrument]
    pub fn parse(figure: Figure, origin: &str, destination: &str) -> Result<Self, ContractError> {
        Ok(Self::new(
            figure,
            parse_position(origin)?,
            parse_position(destination)?,
        ))
    }

    /// Column offset of the move.
    pub fn dx(&self) -> i64 {
        i64::from(self.destination.x()) - i64::from(self.origin.x())
    }

    /// Row offset of the move.
    pub fn dy(&self) -> i64 {
        i64::from(self.destination.y()) - i64::from(self.origin.y())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.figure, self.origin, self.destination)
    }
}

/// Error that can occur when playing a move through [`Game`](super::Game).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already reached a terminal state.
    #[display("Game is already over: {}", _0)]
    GameOver(GameStatus),

    /// The move breaks one of the movement rules.
    #[display("Invalid move {}: breaks the {} rule", mv, rule)]
    IllegalMove {
        /// The rejected move.
        mv: Move,
        /// The first rule it broke.
        rule: MoveRule,
    },
}

impl std::error::Error for MoveError {}
