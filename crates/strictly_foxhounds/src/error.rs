//! Contract error types.
//!
//! A contract error means the caller handed the engine something it
//! promised not to: malformed notation, an out-of-range dimension, a board
//! that breaks its invariants. Gameplay outcomes (an illegal move, a bad
//! save file) are never reported through this type.

use super::coord::Position;
use super::types::Figure;
use derive_more::{Display, Error};

/// The specific contract that was broken.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ContractErrorKind {
    /// Text does not match `[A-Z][0-9]{1,2}`.
    #[display("Malformed position: {:?}", _0)]
    MalformedPosition(String),

    /// Board dimension outside `[4, 26]`.
    #[display("Board dimension {} outside [4, 26]", _0)]
    DimensionOutOfRange(usize),

    /// Figure count does not match `dimension / 2 + 1`.
    #[display("Expected {} figures, found {}", expected, found)]
    WrongFigureCount {
        /// Count required by the dimension.
        expected: usize,
        /// Count actually supplied.
        found: usize,
    },

    /// A figure stands on a white square.
    #[display("{} at {} is not on a black square", figure, position)]
    OffBlackSquare {
        /// Offending figure.
        figure: Figure,
        /// Where it stands.
        position: Position,
    },

    /// A figure stands outside the board.
    #[display("{} at {} is outside the {}x{} board", figure, position, dimension, dimension)]
    OutOfBounds {
        /// Offending figure.
        figure: Figure,
        /// Where it stands.
        position: Position,
        /// Side length of the board.
        dimension: usize,
    },

    /// Two figures share a square.
    #[display("Two figures share {}", _0)]
    Overlap(Position),

    /// Refusing to overwrite an existing save file.
    #[display("Save file {} already exists", _0)]
    SaveConflict(String),

    /// The save format only describes 8x8 boards.
    #[display("Save files only support 8x8 boards, got {}x{}", _0, _0)]
    UnsupportedDimension(usize),
}

/// Contract violation with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Contract violation: {} at {}:{}", kind, file, line)]
pub struct ContractError {
    /// What went wrong.
    pub kind: ContractErrorKind,
    /// Line number where the violation was detected.
    pub line: u32,
    /// Source file where the violation was detected.
    pub file: &'static str,
}

impl ContractError {
    /// Creates a new contract error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ContractErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<ContractErrorKind> for ContractError {
    #[track_caller]
    fn from(kind: ContractErrorKind) -> Self {
        Self::new(kind)
    }
}
