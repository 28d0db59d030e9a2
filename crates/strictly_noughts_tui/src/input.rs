//! Key bindings for the terminal front end.

use crossterm::event::KeyCode;
use strictly_noughts::{Direction, Input};

/// What a key press means to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the game.
    Game(Input),
    /// Leave the program.
    Quit,
    /// Unbound key.
    Ignore,
}

/// Maps a key to its action. Arrows and hjkl move, Enter and Space place.
pub fn map_key(code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Left | KeyCode::Char('h') => KeyAction::Game(Input::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => KeyAction::Game(Input::Direction(Direction::Right)),
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Game(Input::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Game(Input::Direction(Direction::Down)),
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Game(Input::Confirm),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}
