//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use noughts::{Position, Session};
use ratatui::layout::Rect;
use tracing::debug;

use crate::input;
use crate::ui;

/// Main application state: the game session plus the cursor.
pub struct App {
    session: Session,
    cursor: Position,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            cursor: Position::Center,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Handles a key event. Returns true when the user quits.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset()
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = input::digit_to_position(c) {
                    self.play(pos);
                }
            }
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            _ => {}
        }
        false
    }

    /// Handles a mouse event against the screen layout for `area`.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }

        let chunks = ui::layout(area);
        if let Some(pos) = ui::board::cell_at(chunks.board, mouse.column, mouse.row) {
            self.play(pos);
        } else if ui::hit(ui::button_rect(chunks.button), mouse.column, mouse.row) {
            self.reset();
        }
    }

    /// Plays the given position; illegal input is a silent no-op.
    fn play(&mut self, pos: Position) {
        self.cursor = pos;
        if let Err(e) = self.session.play(pos) {
            debug!(error = %e, "move ignored");
        }
    }

    fn reset(&mut self) {
        self.session.reset_game();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use noughts::Square;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digit_key_plays_cell() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(
            app.session().game().board().get(Position::Center),
            Square::Occupied(noughts::Player::X)
        );
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.session().game().board().get(Position::TopCenter),
            Square::Occupied(noughts::Player::X)
        );
    }

    #[test]
    fn test_occupied_cell_key_is_noop() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Char('5')));
        // Second press rejected; still O to move.
        assert_eq!(app.session().game().to_move(), noughts::Player::O);
        assert_eq!(app.session().game().history().len(), 1);
    }

    #[test]
    fn test_reset_key_starts_new_round() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.session().game().history().is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert!(App::new().handle_key(key(KeyCode::Char('q'))));
        assert!(App::new().handle_key(key(KeyCode::Esc)));
        assert!(!app.handle_key(key(KeyCode::Char('5'))));
    }

    #[test]
    fn test_click_plays_cell() {
        let mut app = App::new();
        let area = Rect::new(0, 0, 80, 24);
        let chunks = ui::layout(area);
        let rects = ui::board::cell_rects(chunks.board);

        // Click the center of cell 0.
        let target = rects[0];
        app.handle_mouse(
            click(target.x + target.width / 2, target.y + target.height / 2),
            area,
        );
        assert_eq!(
            app.session().game().board().get(Position::TopLeft),
            Square::Occupied(noughts::Player::X)
        );
    }

    #[test]
    fn test_click_outside_board_is_noop() {
        let mut app = App::new();
        let area = Rect::new(0, 0, 80, 24);
        app.handle_mouse(click(0, 0), area);
        assert!(app.session().game().history().is_empty());
    }

    #[test]
    fn test_click_new_game_button_resets() {
        let mut app = App::new();
        let area = Rect::new(0, 0, 80, 24);
        app.handle_key(key(KeyCode::Char('5')));

        let chunks = ui::layout(area);
        let button = ui::button_rect(chunks.button);
        app.handle_mouse(
            click(button.x + button.width / 2, button.y + 1),
            area,
        );
        assert!(app.session().game().history().is_empty());
    }
}
