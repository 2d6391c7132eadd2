//! History consistency invariant: replaying the history reproduces the board.

use super::Invariant;
use crate::game::Game;
use crate::types::{Board, Square};

/// Invariant: The board is exactly the result of applying the history.
///
/// Every occupied square is accounted for by one recorded move and
/// vice versa. This catches lost moves, duplicated moves, and direct
/// board edits.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        if game.board().filled() != game.history().len() {
            return false;
        }

        let mut rebuilt = Board::new(game.board().size());
        for mv in game.history() {
            if rebuilt.set(mv.position, Square::Occupied(mv.seat)).is_err() {
                return false;
            }
        }
        rebuilt == *game.board()
    }

    fn description() -> &'static str {
        "Replaying the move history reproduces the board"
    }
}
