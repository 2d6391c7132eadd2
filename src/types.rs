//! Core domain types: seats, squares, and the board.

use crate::action::InvalidMovement;
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Canonical board size (a 3×3 grid with 8 winning lines).
pub const STANDARD_SIZE: usize = 3;

/// The mark rendered for an unoccupied square.
pub const EMPTY_MARK: &str = "-";

/// One of the two seats at the table.
///
/// Seats identify which player owns a mark without fixing the marks
/// themselves; the [`Game`](crate::Game) maps each seat to the caller's
/// chosen identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Seat {
    /// The first seat (moves first).
    One,
    /// The second seat.
    Two,
}

impl Seat {
    /// Returns the opposing seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by the given seat's mark.
    Occupied(Seat),
}

/// An N×N board of squares stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board of the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks that a position lies on the board.
    ///
    /// This is a pure range check against the side length; it never
    /// inspects square contents.
    pub fn in_bounds(&self, position: Position) -> bool {
        position.row < self.size && position.col < self.size
    }

    /// Gets the square at the given position, or `None` if out of range.
    pub fn get(&self, position: Position) -> Option<Square> {
        if !self.in_bounds(position) {
            return None;
        }
        self.squares.get(position.row * self.size + position.col).copied()
    }

    /// Sets the square at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMovement::PositionOutOfRange`] if the position
    /// is not on the board; the board is left untouched.
    pub fn set(&mut self, position: Position, square: Square) -> Result<(), InvalidMovement> {
        if !self.in_bounds(position) {
            return Err(InvalidMovement::PositionOutOfRange);
        }
        self.squares[position.row * self.size + position.col] = square;
        Ok(())
    }

    /// Checks if the square at a position is empty.
    ///
    /// Out-of-range positions are not empty; callers that need to tell
    /// the two cases apart must check [`Board::in_bounds`] first.
    pub fn is_empty(&self, position: Position) -> bool {
        matches!(self.get(position), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares
            .iter()
            .filter(|s| **s != Square::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(STANDARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(STANDARD_SIZE);
        assert_eq!(board.squares().len(), 9);
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(board.filled(), 0);
    }

    #[test]
    fn test_in_bounds() {
        let board = Board::new(3);
        assert!(board.in_bounds(Position::new(0, 0)));
        assert!(board.in_bounds(Position::new(2, 2)));
        assert!(!board.in_bounds(Position::new(3, 0)));
        assert!(!board.in_bounds(Position::new(0, 3)));
        assert!(!board.in_bounds(Position::new(9, 9)));
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(3);
        board
            .set(Position::new(1, 2), Square::Occupied(Seat::One))
            .expect("in range");
        assert_eq!(
            board.get(Position::new(1, 2)),
            Some(Square::Occupied(Seat::One))
        );
        assert_eq!(board.get(Position::new(3, 3)), None);
        assert_eq!(board.filled(), 1);
    }

    #[test]
    fn test_set_out_of_range_leaves_board_untouched() {
        let mut board = Board::new(3);
        let err = board
            .set(Position::new(3, 0), Square::Occupied(Seat::Two))
            .unwrap_err();
        assert_eq!(err, InvalidMovement::PositionOutOfRange);
        assert_eq!(board.filled(), 0);
    }

    #[test]
    fn test_is_empty() {
        let mut board = Board::new(3);
        assert!(board.is_empty(Position::new(0, 1)));
        board
            .set(Position::new(0, 1), Square::Occupied(Seat::One))
            .expect("in range");
        assert!(!board.is_empty(Position::new(0, 1)));
        // Out of range is not "empty".
        assert!(!board.is_empty(Position::new(5, 5)));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Seat::One.opponent(), Seat::Two);
        assert_eq!(Seat::Two.opponent(), Seat::One);
    }

    #[test]
    fn test_seat_iteration_covers_both_seats() {
        use strum::IntoEnumIterator;
        assert_eq!(Seat::iter().collect::<Vec<_>>(), vec![Seat::One, Seat::Two]);
    }

    #[test]
    fn test_zero_size_board() {
        let board = Board::new(0);
        assert!(board.squares().is_empty());
        assert!(!board.in_bounds(Position::new(0, 0)));
        assert_eq!(board.get(Position::new(0, 0)), None);
    }
}
