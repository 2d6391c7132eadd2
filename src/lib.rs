//! Tic-tac-toe rules engine - a strict two-player game aggregate
//!
//! This library implements the full rules of tic-tac-toe for two
//! players identified by the marks they play with. It validates every
//! move, detects wins and ties, and renders the board as text.
//!
//! # Architecture
//!
//! - **Game**: the aggregate owning players, board, turn, and outcome
//! - **Rules**: pure win and draw detection over boards
//! - **Contracts**: ordered pre/postcondition validation for moves
//! - **Invariants**: first-class, independently testable state properties
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, GameOver};
//!
//! let mut game = Game::new("X", "O");
//! game.make_move("X", (0, 0))?;
//! game.make_move("O", (1, 1))?;
//! game.make_move("X", (0, 1))?;
//! game.make_move("O", (2, 2))?;
//!
//! // Completing the top row ends the game.
//! let outcome = game.make_move("X", (0, 2))?;
//! assert_eq!(outcome, Some(GameOver::Winner("X".into())));
//! assert_eq!(game.winner(), Some("X"));
//! # Ok::<(), tictactoe::InvalidMovement>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
mod position;
mod types;

// Public modules - composable rule and verification surfaces
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Game aggregate
pub use game::Game;

// Crate-level exports - Moves and outcomes
pub use action::{GameOver, InvalidMovement, Move};

// Crate-level exports - Domain types
pub use position::{ParsePositionError, Position};
pub use types::{Board, Seat, Square, EMPTY_MARK, STANDARD_SIZE};
