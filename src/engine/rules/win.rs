//! Win detection.

use super::super::coord::Coord;
use super::super::types::{Board, Cell, Player};
use tracing::instrument;

/// Checks the board for a completed line.
///
/// Lines are scanned rows first, then columns, then the two diagonals,
/// and the first complete line decides the result. Returns `Some(player)`
/// for the player holding that line, `None` if no line is complete.
#[instrument]
pub fn winning_mark(board: &Board) -> Option<Player> {
    const LINES: [[Coord; 3]; 8] = [
        // Rows
        [Coord::TOP_LEFT, Coord::TOP_CENTER, Coord::TOP_RIGHT],
        [Coord::MIDDLE_LEFT, Coord::CENTER, Coord::MIDDLE_RIGHT],
        [Coord::BOTTOM_LEFT, Coord::BOTTOM_CENTER, Coord::BOTTOM_RIGHT],
        // Columns
        [Coord::TOP_LEFT, Coord::MIDDLE_LEFT, Coord::BOTTOM_LEFT],
        [Coord::TOP_CENTER, Coord::CENTER, Coord::BOTTOM_CENTER],
        [Coord::TOP_RIGHT, Coord::MIDDLE_RIGHT, Coord::BOTTOM_RIGHT],
        // Diagonals
        [Coord::TOP_LEFT, Coord::CENTER, Coord::BOTTOM_RIGHT],
        [Coord::TOP_RIGHT, Coord::CENTER, Coord::BOTTOM_LEFT],
    ];

    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return cell.mark();
        }
    }

    None
}
