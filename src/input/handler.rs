//! Key bindings for the terminal

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::GameKey;
use crate::game::Direction;

/// Letter that starts a new round. The game-over overlay names it too.
pub const RESTART_KEY: char = 'r';

/// Letter alternatives to the arrow keys
const LETTER_MOVES: [(char, Direction); 4] = [
    ('w', Direction::Up),
    ('s', Direction::Down),
    ('a', Direction::Left),
    ('d', Direction::Right),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Press(GameKey),
    Quit,
    None,
}

fn arrow(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

fn letter(ch: char) -> KeyAction {
    let ch = ch.to_ascii_lowercase();

    if ch == RESTART_KEY {
        return KeyAction::Press(GameKey::Restart);
    }
    if ch == 'q' {
        return KeyAction::Quit;
    }

    LETTER_MOVES
        .iter()
        .find(|(bound, _)| *bound == ch)
        .map_or(KeyAction::None, |(_, dir)| KeyAction::Press(GameKey::Move(*dir)))
}

/// Translate a terminal key event into a game key or a quit request
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    if let Some(dir) = arrow(key.code) {
        return KeyAction::Press(GameKey::Move(dir));
    }

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(ch) => letter(ch),
        _ => KeyAction::None,
    }
}
