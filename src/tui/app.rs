//! Application state and logic.

use crossterm::event::KeyCode;
use noughts::{Coord, GameEngine, GameState, GameStatus, MoveOutcome, Player, UiConfig};
use tracing::debug;

use super::input;

/// Main application state.
pub struct App {
    engine: GameEngine,
    config: UiConfig,
    cursor: Coord,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: UiConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            config,
            cursor: Coord::CENTER,
            status_message: opening_message(Player::X),
            should_quit: false,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Gets the cursor cell.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the player asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the key hint line is drawn.
    pub fn show_help(&self) -> bool {
        *self.config.show_help()
    }

    /// Whether the grid uses plain ASCII separators.
    pub fn ascii_borders(&self) -> bool {
        *self.config.ascii_borders()
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        debug!(?key, "Handling key press");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.handle_tap(self.cursor);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(coord) = input::digit_cell(c) {
                    self.cursor = coord;
                    self.handle_tap(coord);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Submits a tap on the given cell and refreshes the status line.
    pub fn handle_tap(&mut self, coord: Coord) {
        let mover = self.state().current_player();
        let outcome = self.engine.apply_move(coord);
        debug!(%coord, %outcome, "Tap handled");

        self.cursor = coord;
        self.status_message = match outcome {
            MoveOutcome::Accepted => match self.state().status() {
                GameStatus::Won(winner) => {
                    format!("{} wins! Press 'r' to restart or 'q' to quit.", winner)
                }
                GameStatus::Draw => {
                    "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string()
                }
                GameStatus::InProgress => {
                    format!(
                        "{} played {}. {}'s turn.",
                        mover,
                        coord.label(),
                        self.state().current_player()
                    )
                }
            },
            MoveOutcome::RejectedOccupied => {
                format!("{} is taken. {}'s turn.", coord.label(), mover)
            }
            MoveOutcome::RejectedGameOver => {
                "Game over. Press 'r' to restart or 'q' to quit.".to_string()
            }
        };
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.cursor = Coord::CENTER;
        self.status_message = format!("Game restarted. {}", opening_message(Player::X));
    }
}

fn opening_message(player: Player) -> String {
    format!("{}'s turn. Tap a cell, press 1-9, or move with arrows.", player)
}
