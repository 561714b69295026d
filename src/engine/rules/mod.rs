//! Board evaluation rules.
//!
//! Pure functions over a board, separated from state mutation so the
//! move handling in [`crate::engine::GameEngine`] can order its checks
//! explicitly.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_mark;
