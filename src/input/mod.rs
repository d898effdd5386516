//! Keyboard input, read once per frame as a snapshot of held keys

pub mod handler;
pub mod terminal;

pub use handler::{map_key, KeyAction, RESTART_KEY};
pub use terminal::TerminalInput;

use anyhow::Result;

use crate::game::Direction;

/// The keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Move(Direction),
    Restart,
}

/// Everything the input source observed since the previous frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// A close request (window close, quit key, Ctrl+C) was seen
    pub close: bool,
    held: Vec<GameKey>,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn closed() -> Self {
        Self {
            close: true,
            held: Vec::new(),
        }
    }

    pub fn press(&mut self, key: GameKey) {
        if !self.held.contains(&key) {
            self.held.push(key);
        }
    }

    pub fn with(mut self, key: GameKey) -> Self {
        self.press(key);
        self
    }

    pub fn is_held(&self, key: GameKey) -> bool {
        self.held.contains(&key)
    }

    /// The single direction to apply this frame.
    ///
    /// When several directional keys are held, Up wins over Down, Down over
    /// Left and Left over Right, regardless of the order they were pressed.
    pub fn direction(&self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| self.is_held(GameKey::Move(*dir)))
    }

    pub fn restart_requested(&self) -> bool {
        self.is_held(GameKey::Restart)
    }
}

/// Source of per-frame keyboard state
pub trait InputSource {
    /// Drain pending events without blocking
    fn poll(&mut self) -> Result<FrameInput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frame() {
        let input = FrameInput::new();
        assert!(!input.close);
        assert_eq!(input.direction(), None);
        assert!(!input.restart_requested());
    }

    #[test]
    fn test_direction_precedence_is_fixed() {
        let input = FrameInput::new()
            .with(GameKey::Move(Direction::Right))
            .with(GameKey::Move(Direction::Left))
            .with(GameKey::Move(Direction::Down));
        assert_eq!(input.direction(), Some(Direction::Down));

        let input = FrameInput::new()
            .with(GameKey::Move(Direction::Right))
            .with(GameKey::Move(Direction::Up));
        assert_eq!(input.direction(), Some(Direction::Up));

        let input = FrameInput::new()
            .with(GameKey::Move(Direction::Right))
            .with(GameKey::Move(Direction::Left));
        assert_eq!(input.direction(), Some(Direction::Left));
    }

    #[test]
    fn test_repeated_presses_collapse() {
        let mut input = FrameInput::new();
        input.press(GameKey::Restart);
        input.press(GameKey::Restart);
        assert!(input.restart_requested());
        assert_eq!(input.held.len(), 1);
    }
}
