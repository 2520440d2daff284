//! Figure positions for one game.

use super::action::Move;
use super::coord::{is_black_square, Position};
use super::error::{ContractError, ContractErrorKind};
use super::invariants::{self, FigureCount, Invariant};
use super::types::Figure;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Smallest supported board.
pub const MIN_DIMENSION: usize = 4;
/// Largest supported board; one column per letter.
pub const MAX_DIMENSION: usize = 26;
/// Board size used when none is given.
pub const DEFAULT_DIMENSION: usize = 8;

/// Where every figure stands, plus the board size.
///
/// Invariants (checked whenever a board is built from outside data):
/// - every figure stands on a black square inside the board,
/// - no two figures share a square,
/// - there are exactly `dimension / 2` hounds and one fox.
///
/// [`apply_move`](Self::apply_move) trusts its caller and re-checks
/// nothing, so only validated moves may reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot")]
pub struct BoardState {
    dimension: usize,
    hounds: Vec<Position>,
    fox: Position,
}

/// Unchecked wire form of a [`BoardState`].
#[derive(Deserialize)]
struct BoardSnapshot {
    dimension: usize,
    hounds: Vec<Position>,
    fox: Position,
}

impl TryFrom<BoardSnapshot> for BoardState {
    type Error = ContractError;

    fn try_from(raw: BoardSnapshot) -> Result<Self, Self::Error> {
        let mut positions = raw.hounds;
        positions.push(raw.fox);
        Self::from_positions(raw.dimension, &positions)
    }
}

/// Rejects dimensions outside `[MIN_DIMENSION, MAX_DIMENSION]`.
#[track_caller]
pub fn check_dimension(dimension: usize) -> Result<(), ContractError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
        Ok(())
    } else {
        Err(ContractError::new(ContractErrorKind::DimensionOutOfRange(dimension)))
    }
}

impl BoardState {
    /// Starting layout for a board of the given size.
    ///
    /// Hounds fill row 0 on columns 1, 3, 5, ...; the fox starts on the
    /// last row on the black square nearest the center column.
    ///
    /// # Errors
    ///
    /// Returns [`ContractErrorKind::DimensionOutOfRange`] outside `[4, 26]`.
    #[instrument]
    pub fn initial_layout(dimension: usize) -> Result<Self, ContractError> {
        check_dimension(dimension)?;

        let side = dimension as i32;
        let hounds = (0..side / 2).map(|i| Position::new(1 + 2 * i, 0)).collect();

        // 1-based column, nudged right when it lands on a white square.
        let mut fox_column = side / 2 + side % 2;
        if !is_black_square(fox_column, side) {
            fox_column += 1;
        }
        let fox = Position::new(fox_column - 1, side - 1);

        debug!(dimension, %fox, "Initial layout");
        Ok(Self {
            dimension,
            hounds,
            fox,
        })
    }

    /// Builds a board from the flat form: hounds first, fox last.
    ///
    /// # Errors
    ///
    /// Returns a contract error if the dimension is out of range or the
    /// positions break any board invariant.
    #[instrument]
    pub fn from_positions(dimension: usize, positions: &[Position]) -> Result<Self, ContractError> {
        check_dimension(dimension)?;

        let expected = FigureCount::expected(dimension);
        let wrong_count = || {
            ContractError::new(ContractErrorKind::WrongFigureCount {
                expected,
                found: positions.len(),
            })
        };
        if positions.len() != expected {
            return Err(wrong_count());
        }
        let Some((&fox, hounds)) = positions.split_last() else {
            return Err(wrong_count());
        };

        let board = Self {
            dimension,
            hounds: hounds.to_vec(),
            fox,
        };
        invariants::enforce_invariants(&board)?;
        Ok(board)
    }

    /// Moves a figure. The move must already have been validated.
    ///
    /// For hounds, the first hound standing on the origin is moved; for the
    /// fox, the fox is moved only if it stands on the origin. A move whose
    /// origin matches nothing leaves the board unchanged.
    #[instrument(skip(self), fields(mv = %mv))]
    pub fn apply_move(&mut self, mv: &Move) {
        let slot = match mv.figure {
            Figure::Hound => self.hounds.iter_mut().find(|pos| **pos == mv.origin),
            Figure::Fox => Some(&mut self.fox).filter(|pos| **pos == mv.origin),
        };

        match slot {
            Some(pos) => *pos = mv.destination,
            None => warn!("No {} at {}; board left unchanged", mv.figure, mv.origin),
        }
    }

    /// Checks the dimension range and the figure count.
    ///
    /// Boards built through this module always pass; the check guards the
    /// notation entry points the same way the rest of the contract does.
    #[track_caller]
    pub fn ensure_well_formed(&self) -> Result<(), ContractError> {
        check_dimension(self.dimension)?;
        FigureCount::check(self).map_err(ContractError::new)
    }

    /// Side length of the board.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Hound positions in their stored order.
    pub fn hounds(&self) -> &[Position] {
        &self.hounds
    }

    /// Fox position.
    pub fn fox(&self) -> Position {
        self.fox
    }

    /// Number of hounds on the board.
    pub fn hound_count(&self) -> usize {
        self.hounds.len()
    }

    /// Flat form: hounds in order, then the fox.
    pub fn positions(&self) -> Vec<Position> {
        let mut positions = self.hounds.clone();
        positions.push(self.fox);
        positions
    }

    /// Every figure with its kind, hounds first.
    pub fn figures(&self) -> impl Iterator<Item = (Figure, Position)> + '_ {
        self.hounds
            .iter()
            .map(|pos| (Figure::Hound, *pos))
            .chain(std::iter::once((Figure::Fox, self.fox)))
    }

    /// Which figure stands on `pos`, if any.
    pub fn figure_at(&self, pos: Position) -> Option<Figure> {
        self.figures()
            .find(|(_, at)| *at == pos)
            .map(|(figure, _)| figure)
    }

    /// Whether any figure stands on `pos`.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.figure_at(pos).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::parse_position;

    fn pos(text: &str) -> Position {
        parse_position(text).unwrap()
    }

    #[test]
    fn test_initial_layout_eight() {
        let board = BoardState::initial_layout(8).unwrap();
        assert_eq!(
            board.hounds(),
            &[pos("B1"), pos("D1"), pos("F1"), pos("H1")]
        );
        assert_eq!(board.fox(), pos("E8"));
    }

    #[test]
    fn test_initial_layout_odd_dimension() {
        let board = BoardState::initial_layout(5).unwrap();
        assert_eq!(board.hounds(), &[pos("B1"), pos("D1")]);
        assert_eq!(board.fox(), pos("D5"));
    }

    #[test]
    fn test_initial_layout_rejects_dimension() {
        for dimension in [0, 3, 27, 100] {
            let err = BoardState::initial_layout(dimension).unwrap_err();
            assert_eq!(err.kind, ContractErrorKind::DimensionOutOfRange(dimension));
        }
    }

    #[test]
    fn test_initial_layout_satisfies_invariants() {
        for dimension in MIN_DIMENSION..=MAX_DIMENSION {
            let board = BoardState::initial_layout(dimension).unwrap();
            assert!(invariants::enforce_invariants(&board).is_ok(), "dimension {dimension}");
            assert_eq!(board.positions().len(), dimension / 2 + 1);
        }
    }

    #[test]
    fn test_from_positions_wrong_count() {
        let err = BoardState::from_positions(8, &[pos("B1"), pos("E8")]).unwrap_err();
        assert_eq!(
            err.kind,
            ContractErrorKind::WrongFigureCount {
                expected: 5,
                found: 2
            }
        );
    }

    #[test]
    fn test_from_positions_overlap() {
        let positions = [pos("B1"), pos("B1"), pos("F1"), pos("H1"), pos("E8")];
        let err = BoardState::from_positions(8, &positions).unwrap_err();
        assert_eq!(err.kind, ContractErrorKind::Overlap(pos("B1")));
    }

    #[test]
    fn test_apply_hound_move() {
        let mut board = BoardState::initial_layout(8).unwrap();
        board.apply_move(&Move::new(Figure::Hound, pos("D1"), pos("C2")));
        assert_eq!(board.hounds()[1], pos("C2"));
        assert_eq!(board.fox(), pos("E8"));
    }

    #[test]
    fn test_apply_fox_move() {
        let mut board = BoardState::initial_layout(8).unwrap();
        board.apply_move(&Move::new(Figure::Fox, pos("E8"), pos("D7")));
        assert_eq!(board.fox(), pos("D7"));
    }

    #[test]
    fn test_apply_move_wrong_origin_is_noop() {
        let mut board = BoardState::initial_layout(8).unwrap();
        let before = board.clone();
        // The fox is not a hound, so a hound move from its square moves nothing.
        board.apply_move(&Move::new(Figure::Hound, pos("E8"), pos("D7")));
        assert_eq!(board, before);
    }

    #[test]
    fn test_figure_at() {
        let board = BoardState::initial_layout(8).unwrap();
        assert_eq!(board.figure_at(pos("B1")), Some(Figure::Hound));
        assert_eq!(board.figure_at(pos("E8")), Some(Figure::Fox));
        assert_eq!(board.figure_at(pos("C2")), None);
    }
}
