//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold throughout play.
//! They are testable independently and serve as documentation of the
//! engine's guarantees.

use super::state::GameState;
use tracing::instrument;

#[cfg(kani)]
mod verification;

/// A logical property that must hold for a given state.
///
/// Invariants express guarantees that should never be violated. They
/// are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod exclusive_outcome;
pub mod mark_parity;
pub mod terminal_lock;

pub use exclusive_outcome::ExclusiveOutcomeInvariant;
pub use mark_parity::MarkParityInvariant;
pub use terminal_lock::TerminalLockInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    TerminalLockInvariant,
    ExclusiveOutcomeInvariant,
    MarkParityInvariant,
);

/// Asserts that all game invariants hold (panic on violation in debug builds).
#[instrument(skip(state))]
pub fn assert_invariants(state: &GameState) {
    debug_assert!(
        TerminalLockInvariant::holds(state),
        "Terminal lock violated"
    );
    debug_assert!(
        ExclusiveOutcomeInvariant::holds(state),
        "Exclusive outcome violated"
    );
    debug_assert!(MarkParityInvariant::holds(state), "Mark parity violated");
}

#[cfg(test)]
mod tests {
    use super::super::{Coord, GameEngine};
    use super::*;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = GameEngine::new();
        assert!(GameInvariants::check_all(engine.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new();
        for coord in [Coord::TOP_LEFT, Coord::CENTER, Coord::TOP_RIGHT] {
            assert!(engine.apply_move(coord).is_accepted());
            assert!(GameInvariants::check_all(engine.state()).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        use super::super::state::GameState;
        use super::super::types::{Board, Player};

        // A recorded win without the lock, and O holding X's opening turn.
        let state = GameState::from_parts(Board::new(), Player::O, Some(Player::X), false, false);

        let result = GameInvariants::check_all(&state);
        assert!(result.is_err());

        let violations = result.unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::new();

        type TwoInvariants = (TerminalLockInvariant, ExclusiveOutcomeInvariant);
        assert!(TwoInvariants::check_all(engine.state()).is_ok());
    }
}
