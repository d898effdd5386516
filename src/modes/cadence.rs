use std::time::{Duration, Instant};

/// Rate limiter for simulation ticks.
///
/// Remembers when the last tick was let through and only lets the next one
/// through once the requested interval has elapsed on the wall clock.
#[derive(Debug, Clone, Copy)]
pub struct CadenceGate {
    last: Instant,
}

impl CadenceGate {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Returns true, and re-anchors at `now`, if `interval` has passed
    pub fn ready(&mut self, now: Instant, interval: Duration) -> bool {
        if self.elapsed(now) >= interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last)
    }
}
