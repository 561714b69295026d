//! Stateless UI rendering and hit testing.
//!
//! Geometry helpers are shared between drawing and mouse hit testing so
//! a tap always lands on the cell the player sees.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::rc::Rc;

use noughts::{Cell, Coord, Player};

use super::app::App;

const BOARD_WIDTH: u16 = 38;
const BOARD_HEIGHT: u16 = 11;

/// Renders the full screen: title, board, status, and key hints.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area(), app.show_help());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks.title);

    draw_board(frame, chunks.board, app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks.status);

    if let Some(help) = chunks.help {
        let hints =
            Paragraph::new("click or 1-9 to play | arrows + enter to aim | r restart | q quit")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
        frame.render_widget(hints, help);
    }
}

/// Finds the board cell under a screen position, if any.
pub fn hit_cell(area: Rect, show_help: bool, position: Position) -> Option<Coord> {
    let chunks = screen_chunks(area, show_help);
    let board_area = center_rect(chunks.board, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = board_rows(board_area);

    Coord::ALL.iter().copied().find(|coord| {
        let cols = row_cols(rows[coord.row() * 2]);
        cols[coord.column() * 2].contains(position)
    })
}

struct ScreenChunks {
    title: Rect,
    board: Rect,
    status: Rect,
    help: Option<Rect>,
}

fn screen_chunks(area: Rect, show_help: bool) -> ScreenChunks {
    let mut constraints = vec![
        Constraint::Length(3),            // Title
        Constraint::Min(BOARD_HEIGHT),    // Board
        Constraint::Length(3),            // Status
    ];
    if show_help {
        constraints.push(Constraint::Length(1)); // Key hints
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    ScreenChunks {
        title: chunks[0],
        board: chunks[1],
        status: chunks[2],
        help: show_help.then(|| chunks[3]),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    // Center the board
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = board_rows(board_area);

    let (horizontal, vertical) = if app.ascii_borders() {
        ("-", "|")
    } else {
        ("─", "│")
    };

    draw_row(
        frame,
        rows[0],
        app,
        [Coord::TOP_LEFT, Coord::TOP_CENTER, Coord::TOP_RIGHT],
        vertical,
    );
    draw_separator(frame, rows[1], horizontal);
    draw_row(
        frame,
        rows[2],
        app,
        [Coord::MIDDLE_LEFT, Coord::CENTER, Coord::MIDDLE_RIGHT],
        vertical,
    );
    draw_separator(frame, rows[3], horizontal);
    draw_row(
        frame,
        rows[4],
        app,
        [Coord::BOTTOM_LEFT, Coord::BOTTOM_CENTER, Coord::BOTTOM_RIGHT],
        vertical,
    );
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, coords: [Coord; 3], vertical: &str) {
    let cols = row_cols(area);

    draw_cell(frame, cols[0], app, coords[0]);
    draw_vertical_separator(frame, cols[1], vertical);
    draw_cell(frame, cols[2], app, coords[1]);
    draw_vertical_separator(frame, cols[3], vertical);
    draw_cell(frame, cols[4], app, coords[2]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, coord: Coord) {
    let cell = app.state().board().get(coord);

    let (symbol, base_style) = match cell {
        Cell::Empty => (
            format!(" {} ", coord.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Mark(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Mark(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if coord == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Pad one line so the mark sits on the middle row of the cell, and
    // style the paragraph so the cursor highlight covers the whole cell.
    let lines = vec![Line::default(), Line::from(symbol)];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, glyph: &str) {
    let sep = Paragraph::new(glyph.repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect, glyph: &str) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from(glyph)).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn board_rows(board_area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area)
}

fn row_cols(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_cell_finds_every_cell_center() {
        let area = Rect::new(0, 0, 80, 24);
        let chunks = screen_chunks(area, true);
        let board_area = center_rect(chunks.board, BOARD_WIDTH, BOARD_HEIGHT);
        let rows = board_rows(board_area);

        for coord in Coord::ALL {
            let cols = row_cols(rows[coord.row() * 2]);
            let cell = cols[coord.column() * 2];
            let center = Position::new(cell.x + cell.width / 2, cell.y + cell.height / 2);
            assert_eq!(hit_cell(area, true, center), Some(coord));
        }
    }

    #[test]
    fn test_hit_outside_board_misses() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(hit_cell(area, true, Position::new(0, 0)), None);
    }

    #[test]
    fn test_hit_on_separator_misses() {
        let area = Rect::new(0, 0, 80, 24);
        let chunks = screen_chunks(area, false);
        let board_area = center_rect(chunks.board, BOARD_WIDTH, BOARD_HEIGHT);
        let rows = board_rows(board_area);
        let sep = row_cols(rows[0])[1];
        assert_eq!(hit_cell(area, false, Position::new(sep.x, sep.y)), None);
    }

    #[test]
    fn test_help_line_shifts_geometry() {
        let area = Rect::new(0, 0, 80, 24);
        let with_help = screen_chunks(area, true);
        let without = screen_chunks(area, false);
        assert!(with_help.help.is_some());
        assert!(without.help.is_none());
        assert!(with_help.board.height < without.board.height);
    }
}
