//! Keyboard input mapping.
//!
//! Pure functions from key codes to UI actions, so the event loop holds no
//! game logic.

use crossterm::event::KeyCode;
use tic_tac_toe::Position;

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up one row.
    Up,
    /// Down one row.
    Down,
    /// Left one column.
    Left,
    /// Right one column.
    Right,
}

/// What a key press asks the UI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move the cursor.
    MoveCursor(Direction),
    /// Click the cell under the cursor.
    ClickCursor,
    /// Click a cell directly.
    Click(Position),
    /// Start a new round, keeping the score.
    Restart,
    /// Start a new round and clear the score.
    ResetAll,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action. Unbound keys map to `None`.
pub fn map_key(key: KeyCode) -> Option<UiAction> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(UiAction::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(UiAction::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(UiAction::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(UiAction::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiAction::ClickCursor),
        // Keys 1-9 follow the numbers shown in empty cells.
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(UiAction::Click),
        KeyCode::Char('r') => Some(UiAction::Restart),
        KeyCode::Char('a') => Some(UiAction::ResetAll),
        KeyCode::Char('q') | KeyCode::Esc => Some(UiAction::Quit),
        _ => None,
    }
}

/// Moves the cursor one step, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|row| (row, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|col| (row, col)),
        Direction::Right => Some((row, col + 1)),
    };

    target
        .and_then(|(row, col)| Position::from_row_col(row, col))
        .unwrap_or(cursor)
}
