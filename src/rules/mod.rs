//! Game rules.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so they can be composed
//! into contracts and invariant checks.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, has_line};
