//! Keyboard input mapping.

use crossterm::event::KeyCode;
use minimax_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move the cursor to a new cell.
    MoveCursor(Position),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a specific cell.
    Play(Position),
    /// Clear the board and start the next game.
    NewGame,
    /// Leave the program.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Maps a key press to an intent given the current cursor.
pub fn intent(cursor: Position, key: KeyCode) -> Intent {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Intent::MoveCursor(move_cursor(cursor, key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Intent::PlayCursor,
        KeyCode::Char(c @ '1'..='9') => digit_position(c).map_or(Intent::Ignore, Intent::Play),
        KeyCode::Char('n') | KeyCode::Char('N') => Intent::NewGame,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Intent::Quit,
        _ => Intent::Ignore,
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = cursor.coords();
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}

/// Maps '1'..='9' to cells in row-major order, like a phone keypad.
pub fn digit_position(c: char) -> Option<Position> {
    c.to_digit(10)
        .and_then(|d| (d as usize).checked_sub(1))
        .and_then(Position::from_index)
}
