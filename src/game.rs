//! The game aggregate: two players, a board, and the turn/outcome state.
//!
//! [`Game`] owns every rule decision. Moves go through a fixed
//! validation pipeline, the board is only ever written through
//! [`Game::make_move`], and the recorded winner never changes once set.

use crate::action::{GameOver, InvalidMovement, Move};
use crate::contracts::{assert_invariants, LegalMove};
#[cfg(debug_assertions)]
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::rules::{has_line, is_full};
use crate::types::{Board, Seat, Square, EMPTY_MARK, STANDARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// A two-player game in progress or finished.
///
/// The two players are identified by the marks they play with; the
/// first player always moves first. The aggregate tracks whose turn is
/// pending, which squares are occupied, the recorded winner, and the
/// full move history.
///
/// A game ends when a move completes a line (that player wins) or
/// fills the last square (tie). Win detection runs first, so a move
/// that does both wins. Once ended, the state is frozen: every further
/// move is rejected and the getters keep answering the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) player1: String,
    pub(crate) player2: String,
    pub(crate) board: Board,
    pub(crate) next_turn: Seat,
    pub(crate) winner: Option<Seat>,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Starts a new game on the standard 3×3 board.
    ///
    /// `player1` moves first. The identifiers double as the marks
    /// drawn on the board, so they are usually short strings like
    /// `"X"` and `"O"`. They must be distinct, and should also differ
    /// from the `"-"` empty mark; neither rule is enforced, and a
    /// clash with the empty mark only affects rendering.
    #[instrument(skip_all)]
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self::with_size(player1, player2, STANDARD_SIZE)
    }

    /// Starts a new game on an N×N board.
    ///
    /// Sizes other than 3 follow the same rules with `2N + 2` winning
    /// lines. A size of zero produces a board that is born full, so
    /// the game is already over before the first move. As with
    /// [`Game::new`], the identifiers must be distinct and should
    /// differ from the `"-"` empty mark.
    #[instrument(skip(player1, player2))]
    pub fn with_size(
        player1: impl Into<String>,
        player2: impl Into<String>,
        size: usize,
    ) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            board: Board::new(size),
            next_turn: Seat::One,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by applying a recorded move sequence.
    ///
    /// Each move is validated and applied exactly as if it were played
    /// live, so an illegal sequence fails with the same error the live
    /// game would have produced.
    #[instrument(skip_all)]
    pub fn replay(
        player1: impl Into<String>,
        player2: impl Into<String>,
        size: usize,
        moves: &[Move],
    ) -> Result<Self, InvalidMovement> {
        let mut game = Self::with_size(player1, player2, size);
        for mv in moves {
            let player = game.mark(mv.seat).to_owned();
            game.make_move(&player, mv.position)?;
        }
        Ok(game)
    }

    /// Attempts to place `player`'s mark at `position`.
    ///
    /// The move is checked in a fixed order and the first failure is
    /// reported:
    ///
    /// 1. the game must still be live,
    /// 2. it must be `player`'s turn,
    /// 3. the position must lie on the board,
    /// 4. the square must be empty.
    ///
    /// On success the mark is placed and the turn passes. Returns
    /// `Ok(Some(_))` when this move ended the game - the winner's
    /// announcement if it completed a line, the tie announcement if it
    /// filled the last square - and `Ok(None)` when play continues.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMovement`] and leaves the game untouched when
    /// any check fails.
    #[instrument(skip(self, position))]
    pub fn make_move(
        &mut self,
        player: &str,
        position: impl Into<Position>,
    ) -> Result<Option<GameOver>, InvalidMovement> {
        let position = position.into();

        #[cfg(debug_assertions)]
        let before = self.clone();

        LegalMove::check(player, position, self)?;

        // Validated: the caller is the pending seat.
        let seat = self.next_turn;
        self.board.set(position, Square::Occupied(seat))?;
        self.history.push(Move::new(seat, position));
        debug!(player, %position, "move applied");

        let outcome = self.conclude(seat);
        self.next_turn = seat.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;
        assert_invariants(self);

        if let Some(announcement) = &outcome {
            debug!(%announcement, "game over");
        }
        Ok(outcome)
    }

    /// Evaluates the board after `seat` moved: win first, then tie.
    fn conclude(&mut self, seat: Seat) -> Option<GameOver> {
        if has_line(&self.board, seat) {
            self.winner = Some(seat);
            return Some(GameOver::Winner(self.mark(seat).to_owned()));
        }
        if is_full(&self.board) {
            return Some(GameOver::Tied);
        }
        None
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every move applied so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The first player's identifier (moves first).
    pub fn player1(&self) -> &str {
        &self.player1
    }

    /// The second player's identifier.
    pub fn player2(&self) -> &str {
        &self.player2
    }

    /// The mark the given seat plays with.
    pub fn mark(&self, seat: Seat) -> &str {
        match seat {
            Seat::One => &self.player1,
            Seat::Two => &self.player2,
        }
    }

    /// The seat to move, or `None` once the game is over.
    pub fn next_seat(&self) -> Option<Seat> {
        if self.is_over() {
            None
        } else {
            Some(self.next_turn)
        }
    }

    /// The identifier of the player to move, or `None` once the game
    /// is over.
    pub fn next_turn(&self) -> Option<&str> {
        self.next_seat().map(|seat| self.mark(seat))
    }

    /// The winning seat, if any.
    pub fn winner_seat(&self) -> Option<Seat> {
        self.winner
    }

    /// The winner's identifier, if any. A tied game has none.
    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|seat| self.mark(seat))
    }

    /// Checks if the game has ended, by win or by full board.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || is_full(&self.board)
    }

    /// Checks if the game ended with a full board and no winner.
    pub fn is_tied(&self) -> bool {
        self.winner.is_none() && is_full(&self.board)
    }

    /// Renders the board as a multi-line string.
    ///
    /// The rendering starts and ends with a newline. Marks within a
    /// row are joined by `"  |  "`, empty squares show as `"-"`, and
    /// rows are separated by a dash line sized to the board.
    pub fn board_as_string(&self) -> String {
        let n = self.board.size();
        let pipe = "  |  ";
        let dashes = "-".repeat((6 * n).saturating_sub(4));

        let mut rendered = String::from("\n");
        for row in 0..n {
            let cells = (0..n)
                .map(|col| match self.board.get(Position::new(row, col)) {
                    Some(Square::Occupied(seat)) => self.mark(seat),
                    _ => EMPTY_MARK,
                })
                .collect::<Vec<_>>();
            rendered.push_str(&cells.join(pipe));
            rendered.push('\n');
            if row + 1 < n {
                rendered.push_str(&dashes);
                rendered.push('\n');
            }
        }
        rendered
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board_as_string())
    }
}
