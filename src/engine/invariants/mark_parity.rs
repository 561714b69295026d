//! Mark parity invariant: turns alternate, X first.

use super::super::state::GameState;
use super::super::types::{Cell, Player};
use super::Invariant;

/// Invariant: mark counts stay balanced and pin the live turn.
///
/// X moves first, so X holds the same number of cells as O or exactly
/// one more. While the board is unlocked the count parity also decides
/// whose turn it is; a terminal move keeps the turn with the mover, so
/// the linkage is only required of live games.
pub struct MarkParityInvariant;

impl Invariant<GameState> for MarkParityInvariant {
    fn holds(state: &GameState) -> bool {
        let cells = state.board().cells();
        let x_count = cells.iter().filter(|c| **c == Cell::Mark(Player::X)).count();
        let o_count = cells.iter().filter(|c| **c == Cell::Mark(Player::O)).count();

        if x_count != o_count && x_count != o_count + 1 {
            return false;
        }

        if !state.locked() {
            let expected = if x_count == o_count {
                Player::X
            } else {
                Player::O
            };
            return state.current_player() == expected;
        }

        true
    }

    fn description() -> &'static str {
        "X holds as many cells as O or one more, and the count decides the live turn"
    }
}
