//! Save files.
//!
//! A save file holds a single line:
//!
//! ```text
//! <F|H> <hound> <hound> <hound> <hound> <fox>
//! ```
//!
//! The first token names the side to move next. Squares are written as a
//! letter `A`-`J` followed by a digit `0`-`8`. The format only describes
//! 8x8 boards; other sizes cannot be saved.

use super::board::BoardState;
use super::coord::{parse_position, Position};
use super::error::{ContractError, ContractErrorKind};
use super::invariants;
use super::types::Figure;
use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// The only board size the save format describes.
pub const SAVE_DIMENSION: usize = 8;

/// Mover token plus one token per figure.
const RECORD_TOKENS: usize = 1 + SAVE_DIMENSION / 2 + 1;

/// A decoded save file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct SaveRecord {
    /// Side to move next.
    next_mover: Figure,
    /// Figure positions on an 8x8 board.
    board: BoardState,
}

impl SaveRecord {
    /// Splits the record into its board and next mover.
    pub fn into_parts(self) -> (BoardState, Figure) {
        (self.board, self.next_mover)
    }
}

/// Why a save file could not be loaded.
///
/// Load failures come from untrusted input; callers report them and keep
/// their current game.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LoadFailure {
    /// No file at the given path.
    #[display("Save file {} does not exist", _0)]
    NotFound(String),

    /// The file has no first line.
    #[display("Save file is empty")]
    Empty,

    /// The line does not have the shape of a save record.
    #[display("Save line does not match the record format: {:?}", _0)]
    Grammar(String),

    /// The mover token is neither `F` nor `H`.
    #[display("Unknown figure token {:?}", _0)]
    UnknownFigure(String),

    /// The squares parse but break a board invariant.
    #[display("Saved board is invalid: {}", _0)]
    InvalidBoard(ContractErrorKind),

    /// The file could not be read.
    #[display("Failed to read save file: {}", _0)]
    Io(String),
}

impl std::error::Error for LoadFailure {}

/// Whether `token` is a square in the save alphabet: `[A-J][0-8]`.
fn is_record_square(token: &str) -> bool {
    matches!(token.as_bytes(), [b'A'..=b'J', b'0'..=b'8'])
}

/// Writes a record as a save line, without a trailing newline.
#[instrument]
pub fn encode_record(record: &SaveRecord) -> String {
    encode_line(record.next_mover, &record.board)
}

fn encode_line(next_mover: Figure, board: &BoardState) -> String {
    let mut line = next_mover.symbol().to_string();
    for position in board.positions() {
        line.push(' ');
        line.push_str(&position.notation());
    }
    line
}

/// Parses a save line.
///
/// # Errors
///
/// Returns a [`LoadFailure`] if the line has the wrong number of tokens,
/// a token outside the save alphabet, an unknown mover, or squares that
/// break the board invariants.
#[instrument]
pub fn decode_record(line: &str) -> Result<SaveRecord, LoadFailure> {
    let grammar = || LoadFailure::Grammar(line.to_string());

    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() != RECORD_TOKENS {
        debug!(tokens = tokens.len(), "Wrong token count");
        return Err(grammar());
    }
    let Some((mover, squares)) = tokens.split_first() else {
        return Err(grammar());
    };

    if mover.chars().count() != 1 || !squares.iter().all(|token| is_record_square(token)) {
        return Err(grammar());
    }
    let next_mover: Figure = mover
        .parse()
        .map_err(|_| LoadFailure::UnknownFigure(mover.to_string()))?;

    let positions = squares
        .iter()
        .map(|token| parse_position(token))
        .collect::<Result<Vec<Position>, _>>()
        .map_err(|_| grammar())?;

    let board = BoardState::from_positions(SAVE_DIMENSION, &positions)
        .map_err(|err| LoadFailure::InvalidBoard(err.kind))?;

    Ok(SaveRecord::new(next_mover, board))
}

/// Loads a save file.
///
/// Only the first line is read; a trailing newline is tolerated. The
/// returned board is freshly built, so a failed load leaves every existing
/// board untouched.
///
/// # Errors
///
/// Returns a [`LoadFailure`] if the file is missing, unreadable, or does
/// not hold a valid record.
#[instrument]
pub fn load_game(path: &Path) -> Result<SaveRecord, LoadFailure> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(LoadFailure::NotFound(path.display().to_string()));
        }
        Err(err) => {
            warn!(error = %err, "Loading from file failed");
            return Err(LoadFailure::Io(err.to_string()));
        }
    };

    let line = contents.lines().next().ok_or(LoadFailure::Empty)?;
    let record = decode_record(line)?;
    info!(next_mover = %record.next_mover, "Game loaded");
    Ok(record)
}

/// Saves a board and the side to move next.
///
/// Returns `Ok(true)` once the file is written and `Ok(false)` if writing
/// failed for an I/O reason (permissions, disk).
///
/// # Errors
///
/// Refusing to overwrite an existing file, a board that is not 8x8, and a
/// board that breaks its invariants are contract errors. The target file
/// is not touched in any of these cases.
#[instrument(skip(board))]
pub fn save_game(board: &BoardState, next_mover: Figure, path: &Path) -> Result<bool, ContractError> {
    let conflict = || ContractError::new(ContractErrorKind::SaveConflict(path.display().to_string()));

    if path.exists() {
        return Err(conflict());
    }
    if board.dimension() != SAVE_DIMENSION {
        return Err(ContractError::new(ContractErrorKind::UnsupportedDimension(
            board.dimension(),
        )));
    }
    invariants::enforce_invariants(board)?;

    let line = encode_line(next_mover, board);
    let written = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .and_then(|mut file| {
            file.write_all(line.as_bytes())?;
            file.flush()
        });

    match written {
        Ok(()) => {
            info!(%next_mover, "Game saved");
            Ok(true)
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Err(conflict()),
        Err(err) => {
            warn!(error = %err, "Saving file failed");
            Ok(false)
        }
    }
}
