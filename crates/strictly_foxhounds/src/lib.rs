//! Strictly Fox and Hounds - rule engine for the fox-and-hounds board game
//!
//! One fox plays against `dimension / 2` hounds on a square board. Every
//! figure steps one square diagonally and only ever stands on black
//! squares; hounds may only advance, the fox may move both ways. The fox
//! wins by reaching the hounds' back row, the hounds win by leaving it no
//! legal move.
//!
//! # Architecture
//!
//! - **Coordinates**: [`Position`] and its `B1`-style notation
//! - **Board**: [`BoardState`], a plain container that trusts its caller
//! - **Rules**: [`is_valid_move`], [`is_fox_win`], [`is_hound_win`]
//! - **Game**: [`Game`], the turn-taking state machine
//! - **Persistence**: single-line save files for 8x8 boards
//!
//! # Example
//!
//! ```
//! use strictly_foxhounds::{Game, GameStatus, Position};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new(8)?;
//! let status = game.make_move("E8".parse::<Position>()?, "D7".parse()?)?;
//! assert_eq!(status, GameStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod coord;
mod error;
mod game;
mod invariants;
mod persistence;
mod rules;
mod types;

// Crate-level exports - Coordinates
pub use coord::{format_position, is_black_square, parse_position, Diagonal, Position};

// Crate-level exports - Domain types
pub use action::{Move, MoveError};
pub use types::{Figure, GameStatus};

// Crate-level exports - Board
pub use board::{check_dimension, BoardState, DEFAULT_DIMENSION, MAX_DIMENSION, MIN_DIMENSION};

// Crate-level exports - Invariants
pub use invariants::{
    enforce_invariants, BlackSquares, BoardInvariants, FigureCount, Invariant, InvariantSet, NoOverlap,
    WithinBounds,
};

// Crate-level exports - Rules
pub use rules::{
    broken_rule, evaluate, is_fox_win, is_fox_win_notation, is_hound_win, is_valid_move,
    is_valid_move_notation, legal_destinations, MoveRule,
};

// Crate-level exports - Game state machine
pub use game::Game;

// Crate-level exports - Persistence
pub use persistence::{
    decode_record, encode_record, load_game, save_game, LoadFailure, SaveRecord, SAVE_DIMENSION,
};

// Crate-level exports - Errors
pub use error::{ContractError, ContractErrorKind};
