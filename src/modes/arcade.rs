use anyhow::Result;
use std::time::{Duration, Instant};
use tokio::time::{interval, MissedTickBehavior};

use super::CadenceGate;
use crate::audio::{AudioSink, SoundCue};
use crate::game::{SimulationState, TickOutcome};
use crate::input::InputSource;
use crate::render::{RenderTarget, Scene};

/// Whether the loop should keep going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Terminated,
}

/// Bridges wall-clock time, keyboard input, drawing and sound to the
/// step-at-a-time [`SimulationState`].
pub struct GameLoop<I, R, A> {
    state: SimulationState,
    scene: Scene,
    gate: CadenceGate,
    frame_interval: Duration,
    input: I,
    renderer: R,
    audio: A,
    rounds: u32,
}

impl<I, R, A> GameLoop<I, R, A>
where
    I: InputSource,
    R: RenderTarget,
    A: AudioSink,
{
    pub fn new(state: SimulationState, input: I, renderer: R, audio: A, now: Instant) -> Self {
        let scene = Scene::new(state.config());
        let frame_interval = Duration::from_secs_f64(1.0 / f64::from(state.config().frame_rate));

        Self {
            state,
            scene,
            gate: CadenceGate::new(now),
            frame_interval,
            input,
            renderer,
            audio,
            rounds: 1,
        }
    }

    /// Render frames at the configured rate until a close request arrives
    pub async fn run(&mut self) -> Result<()> {
        let mut frame_timer = interval(self.frame_interval);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        log::info!(
            "Starting game on a {}x{} grid",
            self.state.cols(),
            self.state.rows()
        );

        loop {
            tokio::select! {
                _ = frame_timer.tick() => {
                    if self.frame(Instant::now())? == FrameOutcome::Terminated {
                        break;
                    }
                }

                // Handle Ctrl+C delivered as a signal rather than a key
                _ = tokio::signal::ctrl_c() => {
                    log::info!("Received Ctrl+C");
                    break;
                }
            }
        }

        log::info!(
            "Game closed after {} round(s), final length {}",
            self.rounds,
            self.state.len()
        );
        Ok(())
    }

    /// Run one frame: input, at most one simulation step, redraw
    pub fn frame(&mut self, now: Instant) -> Result<FrameOutcome> {
        let input = self.input.poll()?;
        if input.close {
            log::info!("Close requested");
            return Ok(FrameOutcome::Terminated);
        }

        if let Some(direction) = input.direction() {
            if self.state.set_heading(direction) {
                log::trace!("Heading changed to {:?}", direction);
            }
        }

        if input.restart_requested() {
            self.restart();
        }

        if !self.state.is_game_over() {
            let speed = Duration::from_secs_f32(self.state.speed());
            if self.gate.ready(now, speed) {
                self.advance();
            }
        }

        self.scene.draw(&self.state, &mut self.renderer)?;

        Ok(FrameOutcome::Continue)
    }

    fn advance(&mut self) {
        match self.state.tick() {
            TickOutcome::AteFood => self.audio.play(SoundCue::Eat),
            TickOutcome::Died(collision) => {
                log::info!(
                    "Round {} over: {:?} at length {}",
                    self.rounds,
                    collision,
                    self.state.len()
                );
                self.audio.play(SoundCue::GameOver);
            }
            TickOutcome::Moved | TickOutcome::Idle => {}
        }
    }

    /// The cadence gate keeps its anchor at the last accepted tick
    fn restart(&mut self) {
        self.state.restart();
        self.rounds += 1;
        log::info!("Round {} started", self.rounds);
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
