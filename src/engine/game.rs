//! Move handling and outcome evaluation.

use super::coord::{Coord, InvalidCoordinate};
use super::invariants;
use super::rules;
use super::state::GameState;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of submitting a move.
///
/// Rejections are part of normal play, not errors: tapping an occupied
/// cell or a finished board leaves the state untouched and reports why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum MoveOutcome {
    /// The mark was placed.
    #[strum(serialize = "accepted")]
    Accepted,
    /// The target cell already holds a mark; nothing changed.
    #[strum(serialize = "rejected: cell occupied")]
    RejectedOccupied,
    /// The game is over; nothing changed.
    #[strum(serialize = "rejected: game over")]
    RejectedGameOver,
}

impl MoveOutcome {
    /// Returns true if the move changed the board.
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveOutcome::Accepted)
    }
}

/// Tic-tac-toe game engine.
///
/// Owns a [`GameState`] and funnels every mutation through
/// [`GameEngine::apply_move`], which keeps the outcome fields and the
/// board lock in step.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Submits a move for the current player at the given cell.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, coord: Coord) -> MoveOutcome {
        // Finished games ignore input until a reset.
        if self.state.is_over() {
            debug!(%coord, "Move rejected, game is over");
            return MoveOutcome::RejectedGameOver;
        }

        // Occupied cells reject silently and keep the turn.
        let player = self.state.current_player();
        let accepted = self.state.board().is_empty(coord);
        if accepted {
            self.state.place(coord, player);
            info!(%player, %coord, "Placed mark");
        } else {
            debug!(%coord, "Move rejected, cell is occupied");
        }

        // Fullness is evaluated before line detection, so a ninth move
        // that also completes a line still ends the game in a draw.
        // A rejected tap re-evaluates as well; an in-progress board has
        // no complete line and open cells, so it never locks here.
        if rules::is_full(self.state.board()) {
            self.state.lock_draw();
            info!("Game over, draw");
        } else if let Some(winner) = rules::winning_mark(self.state.board()) {
            self.state.lock_won(winner);
            info!(%winner, "Game over, win");
        } else if accepted {
            self.state.switch_player();
        }

        invariants::assert_invariants(&self.state);

        if accepted {
            MoveOutcome::Accepted
        } else {
            MoveOutcome::RejectedOccupied
        }
    }

    /// Submits a move from raw row and column input.
    ///
    /// Out-of-range input is reported to the caller; in-range input is
    /// handled by [`GameEngine::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move_at(
        &mut self,
        row: usize,
        column: usize,
    ) -> Result<MoveOutcome, InvalidCoordinate> {
        let coord = Coord::new(row, column)?;
        Ok(self.apply_move(coord))
    }

    /// Clears the board and returns the opening turn to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.state = GameState::new();
    }
}
