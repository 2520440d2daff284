//! Win detection.

use super::super::action::Move;
use super::super::board::BoardState;
use super::super::coord::{parse_position, Diagonal, Position};
use super::super::error::ContractError;
use super::super::types::{Figure, GameStatus};
use super::movement::is_valid_move;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// The fox wins by reaching row 0, the hounds' back row.
#[instrument]
pub fn is_fox_win(fox: Position) -> bool {
    fox.y() == 0
}

/// [`is_fox_win`] for a fox position given in notation.
///
/// # Errors
///
/// Returns a contract error if the notation is malformed.
#[instrument]
pub fn is_fox_win_notation(fox: &str) -> Result<bool, ContractError> {
    Ok(is_fox_win(parse_position(fox)?))
}

/// The hounds win once the fox has no legal move.
///
/// Only the fox's immediate diagonal neighbors are examined. Neighbors
/// off the board are skipped without consulting the movement rules.
#[instrument(skip(board), fields(fox = %board.fox()))]
pub fn is_hound_win(board: &BoardState) -> bool {
    let fox = board.fox();
    let escape = Diagonal::iter()
        .filter_map(|diagonal| fox.step(diagonal))
        .filter(|candidate| candidate.is_within(board.dimension()))
        .find(|candidate| is_valid_move(board, &Move::new(Figure::Fox, fox, *candidate)));

    match escape {
        Some(square) => {
            debug!(%square, "Fox can still move");
            false
        }
        None => {
            info!("Fox is trapped");
            true
        }
    }
}

/// Status of the game on `board`; a fox win takes priority.
#[instrument(skip(board))]
pub fn evaluate(board: &BoardState) -> GameStatus {
    if is_fox_win(board.fox()) {
        GameStatus::FoxWins
    } else if is_hound_win(board) {
        GameStatus::HoundsWin
    } else {
        GameStatus::InProgress
    }
}
