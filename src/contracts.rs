//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{InvalidMovement, Move};
use crate::game::Game;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Position;
use crate::types::{Board, Seat, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), InvalidMovement>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), InvalidMovement>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be live.
pub struct GameActive;

impl GameActive {
    /// Rejects moves on a finished game.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), InvalidMovement> {
        if game.is_over() {
            Err(InvalidMovement::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the caller's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects callers other than the pending player.
    ///
    /// The caller is compared by identifier, so an identifier from
    /// outside the game is treated like any other out-of-turn caller.
    #[instrument(skip(game))]
    pub fn check(player: &str, game: &Game) -> Result<(), InvalidMovement> {
        match game.next_turn() {
            Some(expected) if expected == player => Ok(()),
            Some(expected) => Err(InvalidMovement::WrongTurn(expected.to_owned())),
            None => Err(InvalidMovement::GameOver),
        }
    }
}

/// Precondition: The position must lie on the board.
pub struct PositionInRange;

impl PositionInRange {
    /// Rejects positions outside the board, without looking at contents.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &Game) -> Result<(), InvalidMovement> {
        if game.board().in_bounds(position) {
            Ok(())
        } else {
            Err(InvalidMovement::PositionOutOfRange)
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects positions whose square already carries a mark.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &Game) -> Result<(), InvalidMovement> {
        match game.board().get(position) {
            Some(Square::Empty) => Ok(()),
            Some(Square::Occupied(_)) => Err(InvalidMovement::PositionTaken),
            None => Err(InvalidMovement::PositionOutOfRange),
        }
    }
}

/// Composite precondition: the full legality check for a move.
///
/// The checks run in a fixed order - live game, caller's turn,
/// position in range, square empty - and the first failure wins, so
/// callers always see a deterministic error for a given state.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(player: &str, position: Position, game: &Game) -> Result<(), InvalidMovement> {
        GameActive::check(game)?;
        PlayersTurn::check(player, game)?;
        PositionInRange::check(position, game)?;
        SquareIsEmpty::check(position, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game must be live
/// - Must be the caller's turn
/// - Position must be in range
/// - Square must be empty
///
/// Postconditions:
/// - Seats still alternate
/// - History remains consistent with the board
/// - The recorded winner matches the board
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), InvalidMovement> {
        LegalMove::check(game.mark(action.seat), action.position, game)
    }

    fn post(_before: &Game, after: &Game) -> Result<(), InvalidMovement> {
        // Verify all invariants using the composed set
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvalidMovement::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Board-level Checks
// ─────────────────────────────────────────────────────────────

/// Invariant: Mark counts stay balanced (the two seats differ by ≤ 1).
pub struct BoardConsistent;

impl BoardConsistent {
    /// Checks the mark-count balance, warning on violation.
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        let one_count = board
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Seat::One)))
            .count();
        let two_count = board
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Seat::Two)))
            .count();

        let diff = if one_count >= two_count {
            one_count - two_count
        } else {
            two_count - one_count
        };

        let valid = diff <= 1;
        if !valid {
            warn!(one_count, two_count, "Board consistency violated");
        }
        valid
    }
}

/// Asserts that all game invariants hold (panic on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    debug_assert!(
        BoardConsistent::holds(game.board()),
        "Board consistency violated"
    );
    debug_assert!(
        GameInvariants::check_all(game).is_ok(),
        "Game invariants violated"
    );
}
