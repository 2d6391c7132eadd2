//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Seat, Square};
use tracing::instrument;

/// Enumerates the `2N + 2` candidate winning lines of an N×N board:
/// every row, every column, and the two main diagonals.
fn lines(n: usize) -> Vec<Vec<Position>> {
    let mut lines = Vec::with_capacity(2 * n + 2);
    for row in 0..n {
        lines.push((0..n).map(|col| Position::new(row, col)).collect());
    }
    for col in 0..n {
        lines.push((0..n).map(|row| Position::new(row, col)).collect());
    }
    lines.push((0..n).map(|i| Position::new(i, i)).collect());
    lines.push((0..n).map(|i| Position::new(i, n - 1 - i)).collect());
    lines
}

/// Returns the seat occupying every square of the line, if any.
fn line_winner(board: &Board, line: &[Position]) -> Option<Seat> {
    let first = board.get(*line.first()?)?;
    let Square::Occupied(seat) = first else {
        return None;
    };
    line.iter()
        .all(|position| board.get(*position) == Some(first))
        .then_some(seat)
}

/// Checks if there is a winner on the board.
///
/// A seat wins by occupying a full row, a full column, or one of the
/// two main diagonals. Returns the owner of the first completed line
/// found, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Seat> {
    lines(board.size())
        .iter()
        .find_map(|line| line_winner(board, line))
}

/// Checks if the given seat holds a completed line.
///
/// Unlike [`check_winner`] this scans every line, so it can tell when
/// both seats hold one (an unreachable state in legal play).
pub fn has_line(board: &Board, seat: Seat) -> bool {
    lines(board.size())
        .iter()
        .any(|line| line_winner(board, line) == Some(seat))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(usize, usize, Seat)]) -> Board {
        let mut board = Board::new(size);
        for &(row, col, seat) in marks {
            board
                .set(Position::new(row, col), Square::Occupied(seat))
                .unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::default();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(3, &[(0, 0, Seat::One), (0, 1, Seat::One), (0, 2, Seat::One)]);
        assert_eq!(check_winner(&board), Some(Seat::One));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(3, &[(0, 1, Seat::Two), (1, 1, Seat::Two), (2, 1, Seat::Two)]);
        assert_eq!(check_winner(&board), Some(Seat::Two));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let board = board_with(3, &[(0, 0, Seat::Two), (1, 1, Seat::Two), (2, 2, Seat::Two)]);
        assert_eq!(check_winner(&board), Some(Seat::Two));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(3, &[(0, 2, Seat::One), (1, 1, Seat::One), (2, 0, Seat::One)]);
        assert_eq!(check_winner(&board), Some(Seat::One));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let board = board_with(3, &[(0, 0, Seat::One), (0, 1, Seat::One)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(3, &[(0, 0, Seat::One), (0, 1, Seat::Two), (0, 2, Seat::One)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_has_line_per_seat() {
        let board = board_with(3, &[(2, 0, Seat::Two), (2, 1, Seat::Two), (2, 2, Seat::Two)]);
        assert!(has_line(&board, Seat::Two));
        assert!(!has_line(&board, Seat::One));
    }

    #[test]
    fn test_has_line_sees_both_seats() {
        // Hand-built board where both seats hold a row.
        let board = board_with(
            3,
            &[
                (0, 0, Seat::One),
                (0, 1, Seat::One),
                (0, 2, Seat::One),
                (2, 0, Seat::Two),
                (2, 1, Seat::Two),
                (2, 2, Seat::Two),
            ],
        );
        assert!(has_line(&board, Seat::One));
        assert!(has_line(&board, Seat::Two));
    }

    #[test]
    fn test_large_board_needs_full_line() {
        // Three in a row does not win on a 4×4 board.
        let partial = board_with(
            4,
            &[(2, 0, Seat::One), (2, 1, Seat::One), (2, 2, Seat::One)],
        );
        assert_eq!(check_winner(&partial), None);

        let complete = board_with(
            4,
            &[
                (2, 0, Seat::One),
                (2, 1, Seat::One),
                (2, 2, Seat::One),
                (2, 3, Seat::One),
            ],
        );
        assert_eq!(check_winner(&complete), Some(Seat::One));
    }

    #[test]
    fn test_large_board_anti_diagonal() {
        let board = board_with(
            4,
            &[
                (0, 3, Seat::Two),
                (1, 2, Seat::Two),
                (2, 1, Seat::Two),
                (3, 0, Seat::Two),
            ],
        );
        assert_eq!(check_winner(&board), Some(Seat::Two));
    }

    #[test]
    fn test_zero_size_board_has_no_winner() {
        let board = Board::new(0);
        assert_eq!(check_winner(&board), None);
    }
}
