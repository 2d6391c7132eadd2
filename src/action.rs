//! First-class move types and the outcomes of attempting them.
//!
//! Moves are domain events, not side effects. They represent a
//! player's intent and are recorded in the game history for replay.

use crate::position::Position;
use crate::types::Seat;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a seat placing its mark at a position.
///
/// Moves are first-class domain events that can be:
/// - Validated before application
/// - Serialized for replay
/// - Logged for debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The seat making the move.
    pub seat: Seat,
    /// The position where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(seat: Seat, position: Position) -> Self {
        Self { seat, position }
    }

    /// Returns the seat making this move.
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.seat, self.position)
    }
}

/// A move that was rejected before touching the board.
///
/// The variants are ordered by precedence: a move is checked against
/// each condition top to bottom and the first failure is reported, so
/// a move that is simultaneously out of turn and out of range reports
/// the turn error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMovement {
    /// The game already ended; no further moves are accepted.
    #[display("Game is over.")]
    GameOver,

    /// It is the named player's turn, not the caller's.
    #[display("\"{}\" moves next.", _0)]
    WrongTurn(String),

    /// The position does not lie on the board.
    #[display("Position out of range.")]
    PositionOutOfRange,

    /// The square at the position is already occupied.
    #[display("Position already taken.")]
    PositionTaken,

    /// An internal consistency check failed after a move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for InvalidMovement {}

/// The announcement that ends a game.
///
/// Returned from the move that completes a winning line or fills the
/// last square. Checking for a win happens first, so a move that does
/// both announces the winner.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameOver {
    /// The named player completed a winning line.
    #[display("\"{}\" wins!", _0)]
    Winner(String),

    /// The board filled with no winner.
    #[display("Game is tied!")]
    Tied,
}
