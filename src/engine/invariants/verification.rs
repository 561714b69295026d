//! Formal verification of invariants using the Kani model checker.
//!
//! These proof harnesses verify the invariants over all bounded move
//! sequences rather than a handful of sampled games.

use super::super::coord::Coord;
use super::super::game::{GameEngine, MoveOutcome};
use super::GameInvariants;
use super::InvariantSet;

impl kani::Arbitrary for Coord {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        match Coord::from_index(index) {
            Some(coord) => coord,
            None => unreachable!(),
        }
    }
}

/// Verify the invariant set survives any short move sequence.
///
/// Proves: every state reachable through `apply_move` satisfies all
/// game invariants, including sequences with rejected taps.
///
/// The unwind bound covers the inner scans (8 lines, 9 cells), not
/// just the outer move loop.
#[kani::proof]
#[kani::unwind(11)]
fn verify_moves_preserve_invariants() {
    let mut engine = GameEngine::new();

    for _ in 0..4 {
        let coord: Coord = kani::any();
        engine.apply_move(coord);

        assert!(
            GameInvariants::check_all(engine.state()).is_ok(),
            "Invariant violated by apply_move"
        );
    }
}

/// Verify a finished game is frozen.
///
/// Proves: once the state reports the game over, any further move is
/// rejected and leaves the state bit-for-bit unchanged.
#[kani::proof]
#[kani::unwind(11)]
fn verify_terminal_state_is_frozen() {
    let mut engine = GameEngine::new();

    for _ in 0..9 {
        let coord: Coord = kani::any();
        engine.apply_move(coord);
    }

    if engine.state().is_over() {
        let before = engine.state().clone();
        let coord: Coord = kani::any();
        let outcome = engine.apply_move(coord);

        assert!(
            outcome == MoveOutcome::RejectedGameOver,
            "Finished game accepted a move"
        );
        assert!(engine.state() == &before, "Finished game changed state");
    }
}
