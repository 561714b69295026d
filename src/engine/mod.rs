//! Tic-tac-toe engine: the board, the rules, and move handling.
//!
//! All mutation flows through [`GameEngine::apply_move`]; everything
//! else reads the [`GameState`] it maintains.

mod coord;
mod game;
mod state;
mod types;

pub mod invariants;
pub mod rules;

pub use coord::{Coord, InvalidCoordinate};
pub use game::{GameEngine, MoveOutcome};
pub use state::{GameState, GameStatus};
pub use types::{Board, Cell, Player};
