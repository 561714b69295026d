//! Noughts library - a tic-tac-toe engine with a touch-style front end
//!
//! The engine applies moves for two alternating players, detects wins
//! and draws, and locks a finished board until it is reset. A terminal
//! front end renders the grid and feeds taps back into the engine.
//!
//! # Architecture
//!
//! - **Engine**: Board, turn, and outcome tracking behind a single move entry point
//! - **Rules**: Pure win and fullness checks over a board
//! - **Invariants**: First-class state guarantees, checked in debug builds
//! - **Config**: TOML-backed settings for the front end
//!
//! # Example
//!
//! ```
//! use noughts::{Coord, GameEngine, MoveOutcome, Player};
//!
//! let mut game = GameEngine::new();
//! assert_eq!(game.apply_move(Coord::CENTER), MoveOutcome::Accepted);
//! assert_eq!(game.state().current_player(), Player::O);
//!
//! // The same cell rejects silently and the turn stays with O.
//! assert_eq!(game.apply_move(Coord::CENTER), MoveOutcome::RejectedOccupied);
//! assert_eq!(game.state().current_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;

// Public modules
pub mod engine;

// Crate-level exports - Engine types
pub use engine::{
    Board, Cell, Coord, GameEngine, GameState, GameStatus, InvalidCoordinate, MoveOutcome, Player,
};

// Crate-level exports - Front end configuration
pub use config::{ConfigError, UiConfig};
