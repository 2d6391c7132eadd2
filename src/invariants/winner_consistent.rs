//! Winner consistency invariant: the recorded winner owns a line, exclusively.

use super::Invariant;
use crate::game::Game;
use crate::rules::has_line;
use crate::types::Seat;
use strum::IntoEnumIterator;

/// Invariant: The recorded winner matches the board's completed lines.
///
/// At most one seat may hold a completed line, the recorded winner
/// must hold one, and a game without a recorded winner must have no
/// completed line at all.
pub struct WinnerConsistentInvariant;

impl Invariant<Game> for WinnerConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let lined: Vec<Seat> = Seat::iter()
            .filter(|seat| has_line(game.board(), *seat))
            .collect();

        match (game.winner_seat(), lined.as_slice()) {
            (Some(winner), [seat]) => winner == *seat,
            (None, []) => true,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "The recorded winner holds the only completed line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Square;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new("X", "O");
        assert!(WinnerConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_win() {
        let mut game = Game::new("X", "O");
        game.make_move("X", (0, 0)).unwrap();
        game.make_move("O", (1, 0)).unwrap();
        game.make_move("X", (0, 1)).unwrap();
        game.make_move("O", (1, 1)).unwrap();
        game.make_move("X", (0, 2)).unwrap();
        assert!(WinnerConsistentInvariant::holds(&game));
        assert_eq!(game.winner(), Some("X"));
    }

    #[test]
    fn test_unrecorded_line_violates() {
        let mut game = Game::new("X", "O");
        for col in 0..3 {
            game.board
                .set(Position::new(0, col), Square::Occupied(Seat::One))
                .unwrap();
        }
        // A line exists but no winner was recorded.
        assert!(!WinnerConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_two_lines_violates() {
        let mut game = Game::new("X", "O");
        for col in 0..3 {
            game.board
                .set(Position::new(0, col), Square::Occupied(Seat::One))
                .unwrap();
            game.board
                .set(Position::new(2, col), Square::Occupied(Seat::Two))
                .unwrap();
        }
        game.winner = Some(Seat::One);
        assert!(!WinnerConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_winner_without_line_violates() {
        let mut game = Game::new("X", "O");
        game.winner = Some(Seat::Two);
        assert!(!WinnerConsistentInvariant::holds(&game));
    }
}
