//! Terminal lock invariant: the lock flag tracks the game being over.

use super::super::state::GameState;
use super::Invariant;

/// Invariant: the board is locked exactly when the game is over.
///
/// A win or a draw locks the board in the same step that records the
/// outcome, and nothing unlocks it short of a reset.
pub struct TerminalLockInvariant;

impl Invariant<GameState> for TerminalLockInvariant {
    fn holds(state: &GameState) -> bool {
        state.locked() == state.is_over()
    }

    fn description() -> &'static str {
        "Board lock is set exactly when the game is over"
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::types::{Board, Player};
    use super::super::super::{Coord, GameEngine};
    use super::*;

    #[test]
    fn test_new_game_holds() {
        let engine = GameEngine::new();
        assert!(TerminalLockInvariant::holds(engine.state()));
    }

    #[test]
    fn test_won_game_holds() {
        let mut engine = GameEngine::new();
        for coord in [
            Coord::TOP_LEFT,
            Coord::MIDDLE_LEFT,
            Coord::TOP_CENTER,
            Coord::CENTER,
            Coord::TOP_RIGHT,
        ] {
            engine.apply_move(coord);
        }
        assert_eq!(engine.state().winner(), Some(Player::X));
        assert!(TerminalLockInvariant::holds(engine.state()));
    }

    #[test]
    fn test_lock_without_outcome_violates() {
        let state = GameState::from_parts(Board::new(), Player::X, None, false, true);
        assert!(!TerminalLockInvariant::holds(&state));
    }

    #[test]
    fn test_outcome_without_lock_violates() {
        let state = GameState::from_parts(Board::new(), Player::X, Some(Player::X), false, false);
        assert!(!TerminalLockInvariant::holds(&state));
    }
}
