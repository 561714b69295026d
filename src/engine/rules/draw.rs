//! Board fullness, the trigger for a draw.

use super::super::types::{Board, Cell};
use tracing::instrument;

/// Checks if every cell on the board is occupied.
///
/// Move handling tests fullness before looking for a completed line, so
/// a move that fills the board always ends the game in a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}
