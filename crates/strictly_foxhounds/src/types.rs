//! Core domain types for fox and hounds.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The two kinds of figure on the board.
///
/// Parsing (`FromStr`) accepts the one-letter symbols used in save files.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum Figure {
    /// The single fox; moves diagonally in either row direction.
    #[strum(serialize = "F")]
    Fox,
    /// One of the hounds; only advances toward higher rows.
    #[strum(serialize = "H")]
    Hound,
}

impl Figure {
    /// Returns the side that moves after this one.
    pub fn opponent(self) -> Self {
        match self {
            Figure::Fox => Figure::Hound,
            Figure::Hound => Figure::Fox,
        }
    }

    /// One-letter symbol used on the board and in save files.
    pub fn symbol(self) -> char {
        match self {
            Figure::Fox => 'F',
            Figure::Hound => 'H',
        }
    }

    /// Name of the side this figure plays for.
    pub fn side(self) -> &'static str {
        match self {
            Figure::Fox => "Fox",
            Figure::Hound => "Hounds",
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// The fox reached row 0.
    #[display("The Fox wins!")]
    FoxWins,
    /// The fox has no legal move left.
    #[display("The Hounds win!")]
    HoundsWin,
}

impl GameStatus {
    /// Returns true once the game has reached a terminal state.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning side, if any.
    pub fn winner(self) -> Option<Figure> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::FoxWins => Some(Figure::Fox),
            GameStatus::HoundsWin => Some(Figure::Hound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_alternates() {
        for figure in Figure::iter() {
            assert_ne!(figure, figure.opponent());
            assert_eq!(figure, figure.opponent().opponent());
        }
    }

    #[test]
    fn test_symbol_parses_back() {
        for figure in Figure::iter() {
            let parsed: Figure = figure.symbol().to_string().parse().unwrap();
            assert_eq!(parsed, figure);
        }
        assert!("X".parse::<Figure>().is_err());
        assert!("Fox".parse::<Figure>().is_err());
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::InProgress.winner(), None);
        assert!(!GameStatus::InProgress.is_over());
        assert_eq!(GameStatus::FoxWins.winner(), Some(Figure::Fox));
        assert_eq!(GameStatus::HoundsWin.winner(), Some(Figure::Hound));
        assert_eq!(GameStatus::HoundsWin.to_string(), "The Hounds win!");
    }
}
