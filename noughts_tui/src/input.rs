//! Keyboard input mapping.

use crossterm::event::KeyCode;
use noughts::Position;

/// Maps a digit key `1`-`9` to its board position.
pub fn digit_to_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    if digit == 0 {
        return None;
    }
    Position::from_index(digit - 1)
}

/// Moves the cursor one cell in the direction of an arrow key.
///
/// Movement clamps at the board edges; any other key leaves the
/// cursor where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
