//! Exclusive outcome invariant: a game cannot be both won and drawn.

use super::super::state::GameState;
use super::Invariant;

/// Invariant: at most one outcome is recorded.
///
/// The move handling locks the board on the first outcome it records,
/// so a winner and the draw flag can never coexist.
pub struct ExclusiveOutcomeInvariant;

impl Invariant<GameState> for ExclusiveOutcomeInvariant {
    fn holds(state: &GameState) -> bool {
        !(state.winner().is_some() && state.is_draw())
    }

    fn description() -> &'static str {
        "A game records a winner or a draw, never both"
    }
}
