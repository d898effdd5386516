use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

use super::{map_key, FrameInput, InputSource, KeyAction};

/// Reads crossterm events from the controlling terminal.
///
/// Terminals only report key presses (and auto-repeats), so a key counts as
/// held for the frame in which its event arrived.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }

    /// Fold one terminal event into the frame snapshot
    pub fn apply(&self, event: Event, frame: &mut FrameInput) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Release {
                return;
            }

            match map_key(key) {
                KeyAction::Press(game_key) => frame.press(game_key),
                KeyAction::Quit => frame.close = true,
                KeyAction::None => {}
            }
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<FrameInput> {
        let mut frame = FrameInput::new();

        while event::poll(Duration::ZERO).context("Failed to poll terminal events")? {
            let event = event::read().context("Failed to read terminal event")?;
            self.apply(event, &mut frame);
        }

        Ok(frame)
    }
}
