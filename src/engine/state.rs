//! Game state: the board plus turn and outcome tracking.

use super::coord::Coord;
use super::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};

/// Current status of the game, derived from the outcome fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state.
///
/// `winner`, `is_draw`, and `locked` are only ever written together by
/// the engine's move handling, so `locked` always agrees with the game
/// being over. Once locked, the state no longer changes until a reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player whose turn it is.
    current_player: Player,
    /// Winning player, if the game has been won.
    winner: Option<Player>,
    /// Whether the game ended with a full board and no winner.
    is_draw: bool,
    /// Whether the board rejects further moves.
    locked: bool,
}

impl GameState {
    /// Creates a fresh game with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            winner: None,
            is_draw: false,
            locked: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Returns true if the board rejects further moves.
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Returns true if the game has concluded in a win or a draw.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// Returns the status derived from the outcome fields.
    pub fn status(&self) -> GameStatus {
        match (self.winner, self.is_draw) {
            (Some(player), _) => GameStatus::Won(player),
            (None, true) => GameStatus::Draw,
            (None, false) => GameStatus::InProgress,
        }
    }

    /// Places a mark (unchecked - use `GameEngine::apply_move` for validation).
    pub(super) fn place(&mut self, coord: Coord, player: Player) {
        debug_assert!(!self.locked);
        debug_assert!(self.board.is_empty(coord));
        self.board.set(coord, Cell::Mark(player));
    }

    /// Records a win and locks the board.
    pub(super) fn lock_won(&mut self, player: Player) {
        debug_assert!(self.winner.is_none() && !self.is_draw);
        self.winner = Some(player);
        self.locked = true;
    }

    /// Records a draw and locks the board.
    pub(super) fn lock_draw(&mut self) {
        debug_assert!(self.winner.is_none() && !self.is_draw);
        self.is_draw = true;
        self.locked = true;
    }

    /// Hands the turn to the opponent.
    pub(super) fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Assembles a state from raw parts, bypassing move validation.
    #[cfg(test)]
    pub(super) fn from_parts(
        board: Board,
        current_player: Player,
        winner: Option<Player>,
        is_draw: bool,
        locked: bool,
    ) -> Self {
        Self {
            board,
            current_player,
            winner,
            is_draw,
            locked,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.winner(), None);
        assert!(!state.is_draw());
        assert!(!state.locked());
        assert!(!state.is_over());
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_lock_won_sets_status() {
        let mut state = GameState::new();
        state.lock_won(Player::O);
        assert_eq!(state.winner(), Some(Player::O));
        assert!(state.locked());
        assert!(state.is_over());
        assert_eq!(state.status(), GameStatus::Won(Player::O));
    }

    #[test]
    fn test_lock_draw_sets_status() {
        let mut state = GameState::new();
        state.lock_draw();
        assert_eq!(state.winner(), None);
        assert!(state.is_draw());
        assert!(state.locked());
        assert_eq!(state.status(), GameStatus::Draw);
    }

    #[test]
    fn test_switch_player_alternates() {
        let mut state = GameState::new();
        state.switch_player();
        assert_eq!(state.current_player(), Player::O);
        state.switch_player();
        assert_eq!(state.current_player(), Player::X);
    }
}
