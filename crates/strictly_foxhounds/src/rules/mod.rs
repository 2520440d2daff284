//! Game rules for fox and hounds.
//!
//! This module contains pure functions over a [`BoardState`](super::BoardState).
//! Rules are separated from board storage so the board can stay a plain
//! container that trusts its caller.

pub mod movement;
pub mod win;

pub use movement::{broken_rule, is_valid_move, is_valid_move_notation, legal_destinations, MoveRule};
pub use win::{evaluate, is_fox_win, is_fox_win_notation, is_hound_win};
