//! Tests for grid coordinates and validated construction.

use noughts::{Board, Cell, Coord, Player};

#[test]
fn test_new_accepts_the_grid() {
    assert_eq!(Coord::new(0, 0).unwrap(), Coord::TOP_LEFT);
    assert_eq!(Coord::new(1, 1).unwrap(), Coord::CENTER);
    assert_eq!(Coord::new(2, 2).unwrap(), Coord::BOTTOM_RIGHT);
}

#[test]
fn test_new_rejects_out_of_range() {
    for (row, column) in [(3, 0), (0, 3), (3, 3), (100, 1)] {
        let err = Coord::new(row, column).unwrap_err();
        assert_eq!(err.row, row);
        assert_eq!(err.column, column);
    }
}

#[test]
fn test_invalid_coordinate_message() {
    let err = Coord::new(4, 7).unwrap_err();
    assert_eq!(err.to_string(), "coordinate (4, 7) is outside the 3x3 grid");
}

#[test]
fn test_from_index() {
    assert_eq!(Coord::from_index(0), Some(Coord::TOP_LEFT));
    assert_eq!(Coord::from_index(4), Some(Coord::CENTER));
    assert_eq!(Coord::from_index(8), Some(Coord::BOTTOM_RIGHT));
    assert_eq!(Coord::from_index(9), None);
}

#[test]
fn test_index_round_trip() {
    for (index, coord) in Coord::ALL.iter().enumerate() {
        assert_eq!(coord.index(), index);
        assert_eq!(Coord::from_index(index), Some(*coord));
    }
}

#[test]
fn test_row_and_column() {
    assert_eq!(Coord::MIDDLE_RIGHT.row(), 1);
    assert_eq!(Coord::MIDDLE_RIGHT.column(), 2);
    assert_eq!(Coord::BOTTOM_CENTER.row(), 2);
    assert_eq!(Coord::BOTTOM_CENTER.column(), 1);
}

#[test]
fn test_offset_moves_and_clamps() {
    assert_eq!(Coord::CENTER.offset(-1, 0), Some(Coord::TOP_CENTER));
    assert_eq!(Coord::CENTER.offset(1, 1), Some(Coord::BOTTOM_RIGHT));
    assert_eq!(Coord::TOP_LEFT.offset(-1, 0), None);
    assert_eq!(Coord::TOP_LEFT.offset(0, -1), None);
    assert_eq!(Coord::BOTTOM_RIGHT.offset(0, 1), None);
}

#[test]
fn test_offset_extreme_deltas_leave_the_grid() {
    assert_eq!(Coord::CENTER.offset(i16::MAX, 0), None);
    assert_eq!(Coord::CENTER.offset(0, i16::MIN), None);
    assert_eq!(Coord::BOTTOM_RIGHT.offset(i16::MAX, i16::MAX), None);
    assert_eq!(Coord::TOP_LEFT.offset(i16::MIN, i16::MIN), None);
}

#[test]
fn test_labels() {
    assert_eq!(Coord::TOP_LEFT.label(), "top-left");
    assert_eq!(Coord::CENTER.label(), "center");
    assert_eq!(Coord::BOTTOM_RIGHT.label(), "bottom-right");
    assert_eq!(Coord::CENTER.to_string(), "center");
}

#[test]
fn test_open_cells_on_empty_board() {
    let board = Board::new();
    let open = Coord::open_cells(&board);
    assert_eq!(open.len(), 9); // All cells open on an empty board
}

#[test]
fn test_open_cells_filters_occupied() {
    let mut board = Board::new();
    board.set(Coord::TOP_LEFT, Cell::Mark(Player::X));
    board.set(Coord::CENTER, Cell::Mark(Player::O));

    let open = Coord::open_cells(&board);
    assert_eq!(open.len(), 7); // 2 occupied, 7 free
    assert!(!open.contains(&Coord::TOP_LEFT));
    assert!(!open.contains(&Coord::CENTER));
    assert!(open.contains(&Coord::BOTTOM_RIGHT));
}

#[test]
fn test_serializes_as_row_column_pair() {
    let json = serde_json::to_value(Coord::MIDDLE_RIGHT).unwrap();
    assert_eq!(json, serde_json::json!([1, 2]));

    let parsed: Coord = serde_json::from_value(serde_json::json!([2, 0])).unwrap();
    assert_eq!(parsed, Coord::BOTTOM_LEFT);

    let result: Result<Coord, _> = serde_json::from_value(serde_json::json!([3, 0]));
    assert!(result.is_err());
}
