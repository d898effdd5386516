//! Fire-and-forget sound cues

use std::io::{stderr, Stderr, Write};

/// Game events that have a sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Eat,
    GameOver,
}

/// Plays sound cues. Playback problems must never reach the game loop.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

impl<T: AudioSink + ?Sized> AudioSink for Box<T> {
    fn play(&mut self, cue: SoundCue) {
        (**self).play(cue);
    }
}

/// Rings the terminal bell for every cue
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<Stderr> {
    pub fn new() -> Self {
        Self { out: stderr() }
    }
}

impl Default for TerminalBell<Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("Playing {:?} cue", cue);
        let result = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
        if let Err(e) = result {
            log::warn!("Failed to ring terminal bell: {}", e);
        }
    }
}

/// Discards every cue
#[derive(Debug, Default)]
pub struct Muted;

impl AudioSink for Muted {
    fn play(&mut self, cue: SoundCue) {
        log::trace!("Muted {:?} cue", cue);
    }
}
