//! Board coordinates and their textual notation.
//!
//! Columns are letters (`A` is `x = 0`), rows are 1-based numbers
//! (`1` is `y = 0`). Row 0 is the hounds' back row and the fox's target.

use super::error::{ContractError, ContractErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// A square on the board as cartesian coordinates.
///
/// Coordinates are signed so that off-board neighbors of an edge square
/// can be represented and rejected by the bounds rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Creates a position from cartesian coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Column index.
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Row index.
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Whether this is one of the squares figures may stand on.
    pub fn is_black(self) -> bool {
        is_black_square(self.x, self.y)
    }

    /// Whether this lies on a board of the given side length.
    pub fn is_within(self, dimension: usize) -> bool {
        let inside = |c: i32| usize::try_from(c).is_ok_and(|c| c < dimension);
        inside(self.x) && inside(self.y)
    }

    /// The neighboring square one diagonal step away, or `None` if it
    /// cannot be represented.
    pub fn step(self, diagonal: Diagonal) -> Option<Self> {
        let (dx, dy) = diagonal.delta();
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Textual notation, e.g. `E8`.
    pub fn notation(self) -> String {
        format_position(self.x, self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

impl FromStr for Position {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_position(s)
    }
}

impl TryFrom<String> for Position {
    type Error = ContractError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_position(&value)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.notation()
    }
}

/// One of the four diagonal directions.
///
/// "Up" is toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Diagonal {
    /// `(-1, -1)`
    UpLeft,
    /// `(+1, -1)`
    UpRight,
    /// `(-1, +1)`
    DownLeft,
    /// `(+1, +1)`
    DownRight,
}

impl Diagonal {
    /// Coordinate offset of one step in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Diagonal::UpLeft => (-1, -1),
            Diagonal::UpRight => (1, -1),
            Diagonal::DownLeft => (-1, 1),
            Diagonal::DownRight => (1, 1),
        }
    }
}

/// Black squares are those where column and row parity differ.
pub fn is_black_square(x: i32, y: i32) -> bool {
    x.rem_euclid(2) != y.rem_euclid(2)
}

/// Parses notation such as `B1` or `H12`.
///
/// The text must be one uppercase ASCII letter followed by one or two
/// ASCII digits and nothing else.
///
/// # Errors
///
/// Returns [`ContractErrorKind::MalformedPosition`] for anything else.
#[instrument]
pub fn parse_position(text: &str) -> Result<Position, ContractError> {
    let malformed = || ContractError::new(ContractErrorKind::MalformedPosition(text.to_string()));

    let mut chars = text.chars();
    let column = chars
        .next()
        .filter(char::is_ascii_uppercase)
        .ok_or_else(malformed)?;

    let digits = chars.as_str();
    if !(1..=2).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let row: i32 = digits.parse().map_err(|_| malformed())?;

    Ok(Position::new(column as i32 - 'A' as i32, row - 1))
}

/// Formats cartesian coordinates as notation.
///
/// No bounds checking: columns past `Z` or before `A` produce whatever
/// character follows in the code table.
pub fn format_position(x: i32, y: i32) -> String {
    let column = u32::try_from('A' as i64 + i64::from(x))
        .ok()
        .and_then(char::from_u32)
        .unwrap_or('?');
    format!("{column}{}", i64::from(y) + 1)
}
