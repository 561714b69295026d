//! Keyboard mapping: cursor movement and digit shortcuts.

use crossterm::event::KeyCode;
use noughts::Coord;

/// Moves the cursor one cell in the arrow direction, staying on the grid.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let moved = match key {
        KeyCode::Up => cursor.offset(-1, 0),
        KeyCode::Down => cursor.offset(1, 0),
        KeyCode::Left => cursor.offset(0, -1),
        KeyCode::Right => cursor.offset(0, 1),
        _ => None,
    };

    moved.unwrap_or(cursor)
}

/// Maps the digit keys 1-9 onto cells in row-major order.
pub fn digit_cell(c: char) -> Option<Coord> {
    let digit = c.to_digit(10)? as usize;
    if (1..=9).contains(&digit) {
        Coord::from_index(digit - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_between_cells() {
        assert_eq!(move_cursor(Coord::CENTER, KeyCode::Up), Coord::TOP_CENTER);
        assert_eq!(move_cursor(Coord::CENTER, KeyCode::Down), Coord::BOTTOM_CENTER);
        assert_eq!(move_cursor(Coord::CENTER, KeyCode::Left), Coord::MIDDLE_LEFT);
        assert_eq!(move_cursor(Coord::CENTER, KeyCode::Right), Coord::MIDDLE_RIGHT);
    }

    #[test]
    fn test_edges_stay_on_grid() {
        assert_eq!(move_cursor(Coord::TOP_LEFT, KeyCode::Up), Coord::TOP_LEFT);
        assert_eq!(move_cursor(Coord::TOP_LEFT, KeyCode::Left), Coord::TOP_LEFT);
        assert_eq!(
            move_cursor(Coord::BOTTOM_RIGHT, KeyCode::Down),
            Coord::BOTTOM_RIGHT
        );
        assert_eq!(
            move_cursor(Coord::BOTTOM_RIGHT, KeyCode::Right),
            Coord::BOTTOM_RIGHT
        );
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        assert_eq!(move_cursor(Coord::CENTER, KeyCode::Char('x')), Coord::CENTER);
    }

    #[test]
    fn test_digit_mapping() {
        assert_eq!(digit_cell('1'), Some(Coord::TOP_LEFT));
        assert_eq!(digit_cell('5'), Some(Coord::CENTER));
        assert_eq!(digit_cell('9'), Some(Coord::BOTTOM_RIGHT));
        assert_eq!(digit_cell('0'), None);
        assert_eq!(digit_cell('a'), None);
    }
}
