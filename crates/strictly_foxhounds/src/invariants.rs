//! First-class board invariants.
//!
//! Invariants are logical properties every live board must satisfy. They
//! are testable independently and are enforced wherever a board enters the
//! engine from outside: hand-assembled positions, deserialized boards, and
//! boards about to be written to a save file.

use super::board::BoardState;
use super::error::{ContractError, ContractErrorKind};
use std::collections::HashSet;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks the invariant, reporting the first offending detail.
    fn check(state: &S) -> Result<(), ContractErrorKind>;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;

    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool {
        Self::check(state).is_ok()
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose without allocation.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all hold, or every violation found otherwise.
    fn check_all(state: &S) -> Result<(), Vec<ContractErrorKind>>;
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<ContractErrorKind>> {
        let violations: Vec<_> = [I1::check(state), I2::check(state), I3::check(state), I4::check(state)]
            .into_iter()
            .filter_map(Result::err)
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: `dimension / 2` hounds plus one fox.
pub struct FigureCount;

impl FigureCount {
    /// Number of figures a board of this size carries.
    pub fn expected(dimension: usize) -> usize {
        dimension / 2 + 1
    }
}

impl Invariant<BoardState> for FigureCount {
    fn check(board: &BoardState) -> Result<(), ContractErrorKind> {
        let expected = Self::expected(board.dimension());
        let found = board.hound_count() + 1;
        if found == expected {
            Ok(())
        } else {
            Err(ContractErrorKind::WrongFigureCount { expected, found })
        }
    }

    fn description() -> &'static str {
        "Board carries dimension / 2 hounds and one fox"
    }
}

/// Invariant: every figure stands on a black square.
pub struct BlackSquares;

impl Invariant<BoardState> for BlackSquares {
    fn check(board: &BoardState) -> Result<(), ContractErrorKind> {
        match board.figures().find(|(_, pos)| !pos.is_black()) {
            Some((figure, position)) => Err(ContractErrorKind::OffBlackSquare { figure, position }),
            None => Ok(()),
        }
    }

    fn description() -> &'static str {
        "Every figure stands on a black square"
    }
}

/// Invariant: every figure stands inside the board.
pub struct WithinBounds;

impl Invariant<BoardState> for WithinBounds {
    fn check(board: &BoardState) -> Result<(), ContractErrorKind> {
        let dimension = board.dimension();
        match board.figures().find(|(_, pos)| !pos.is_within(dimension)) {
            Some((figure, position)) => Err(ContractErrorKind::OutOfBounds {
                figure,
                position,
                dimension,
            }),
            None => Ok(()),
        }
    }

    fn description() -> &'static str {
        "Every figure stands inside the board"
    }
}

/// Invariant: no two figures share a square.
pub struct NoOverlap;

impl Invariant<BoardState> for NoOverlap {
    fn check(board: &BoardState) -> Result<(), ContractErrorKind> {
        let mut seen = HashSet::new();
        match board.figures().find(|(_, pos)| !seen.insert(*pos)) {
            Some((_, position)) => Err(ContractErrorKind::Overlap(position)),
            None => Ok(()),
        }
    }

    fn description() -> &'static str {
        "No two figures share a square"
    }
}

/// All board invariants, in reporting order.
pub type BoardInvariants = (FigureCount, BlackSquares, WithinBounds, NoOverlap);

/// Fails with the first violated board invariant.
#[track_caller]
pub fn enforce_invariants(board: &BoardState) -> Result<(), ContractError> {
    if let Err(violations) = <BoardInvariants as InvariantSet<BoardState>>::check_all(board)
        && let Some(first) = violations.first()
    {
        warn!(
            violations = violations.len(),
            first = %first,
            "Board invariants violated"
        );
        return Err(ContractError::new(first.clone()));
    }
    Ok(())
}
