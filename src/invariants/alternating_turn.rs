//! Alternating turn invariant: seats alternate One, Two, One, Two, ...

use super::Invariant;
use crate::game::Game;
use crate::types::Seat;

/// Invariant: Seats alternate turns.
///
/// Move history must show One, Two, One, Two, ... with the first seat
/// moving first, and the pending turn must match the history parity
/// while the game is live.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first() {
            if first.seat != Seat::One {
                return false;
            }
        }

        for window in history.windows(2) {
            if window[0].seat == window[1].seat {
                return false;
            }
        }

        // Once the game ends there is no pending turn to check.
        match game.next_seat() {
            Some(seat) => {
                let expected = if history.len() % 2 == 0 {
                    Seat::One
                } else {
                    Seat::Two
                };
                seat == expected
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        "Seats alternate turns, starting with the first player"
    }
}
