//! Move legality.

use super::super::action::Move;
use super::super::board::BoardState;
use super::super::coord::{parse_position, Diagonal, Position};
use super::super::error::ContractError;
use super::super::types::Figure;
use derive_more::Display;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// The movement rules, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum MoveRule {
    /// One diagonal step; hounds only toward higher rows.
    #[display("adjacency")]
    Adjacency,
    /// Origin and destination are black squares.
    #[display("color")]
    Color,
    /// Origin and destination lie on the board.
    #[display("bounds")]
    Bounds,
    /// Destination is empty.
    #[display("occupancy")]
    Occupancy,
    /// Origin holds a figure of the moving kind.
    #[display("ownership")]
    Ownership,
}

impl MoveRule {
    /// Whether `mv` satisfies this rule on `board`.
    pub fn holds(self, board: &BoardState, mv: &Move) -> bool {
        match self {
            MoveRule::Adjacency => match mv.figure {
                Figure::Hound => mv.dx().abs() == 1 && mv.dy() == 1,
                Figure::Fox => mv.dx().abs() == 1 && mv.dy().abs() == 1,
            },
            MoveRule::Color => mv.origin.is_black() && mv.destination.is_black(),
            MoveRule::Bounds => {
                let dimension = board.dimension();
                mv.origin.is_within(dimension) && mv.destination.is_within(dimension)
            }
            MoveRule::Occupancy => !board.is_occupied(mv.destination),
            MoveRule::Ownership => match mv.figure {
                Figure::Hound => board.hounds().contains(&mv.origin),
                Figure::Fox => board.fox() == mv.origin,
            },
        }
    }
}

/// Returns the first rule `mv` breaks, or `None` if it is legal.
#[instrument(skip(board), fields(mv = %mv))]
pub fn broken_rule(board: &BoardState, mv: &Move) -> Option<MoveRule> {
    let broken = MoveRule::iter().find(|rule| !rule.holds(board, mv));
    if let Some(rule) = broken {
        debug!(%rule, "Move rejected");
    }
    broken
}

/// Checks whether a move is legal on the given board.
///
/// Illegal moves are an ordinary outcome of user input, so this never
/// fails; it only answers yes or no.
#[instrument(skip(board), fields(mv = %mv))]
pub fn is_valid_move(board: &BoardState, mv: &Move) -> bool {
    broken_rule(board, mv).is_none()
}

/// Checks a move given in notation, e.g. `("B1", "C2")`.
///
/// # Errors
///
/// Malformed notation, or a board with an out-of-range dimension or the
/// wrong number of figures, is a contract error. Rule failures are
/// `Ok(false)`.
#[instrument(skip(board))]
pub fn is_valid_move_notation(
    board: &BoardState,
    figure: Figure,
    origin: &str,
    destination: &str,
) -> Result<bool, ContractError> {
    board.ensure_well_formed()?;
    let mv = Move::new(figure, parse_position(origin)?, parse_position(destination)?);
    Ok(is_valid_move(board, &mv))
}

/// All squares `figure` could legally move to from `origin`.
#[instrument(skip(board))]
pub fn legal_destinations(board: &BoardState, figure: Figure, origin: Position) -> Vec<Position> {
    Diagonal::iter()
        .filter_map(|diagonal| origin.step(diagonal))
        .filter(|dest| is_valid_move(board, &Move::new(figure, origin, *dest)))
        .collect()
}
