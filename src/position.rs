//! Board coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A zero-indexed (row, column) coordinate on a board.
///
/// Coordinates are unsigned, so negative positions are unrepresentable;
/// whether a position actually lies on a given board is decided by
/// [`Board::in_bounds`](crate::Board::in_bounds). Converts from a
/// `(row, col)` tuple.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From,
)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error parsing a position from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParsePositionError {
    /// The input did not contain exactly two comma-separated fields.
    #[display("expected two comma-separated coordinates, got {:?}", _0)]
    WrongArity(String),
    /// A coordinate field was not an unsigned integer.
    #[display("coordinate {:?} is not an unsigned integer", _0)]
    NotANumber(String),
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `"row,col"`, optionally parenthesised, with whitespace
    /// tolerated around each field. The [`Display`](fmt::Display)
    /// rendering parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let mut fields = inner.split(',');
        let (Some(row), Some(col), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(ParsePositionError::WrongArity(s.to_owned()));
        };
        let parse = |field: &str| {
            field
                .trim()
                .parse::<usize>()
                .map_err(|_| ParsePositionError::NotANumber(field.trim().to_owned()))
        };
        Ok(Self {
            row: parse(row)?,
            col: parse(col)?,
        })
    }
}
