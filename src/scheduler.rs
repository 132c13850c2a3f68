use std::time::Duration;
use std::time::Instant;

/// Decides when the next generation is due, independently of how often the host polls.
///
/// Polling faster than `delay` never causes extra steps. Polling slower delays steps but never
/// batches them: once the delay has elapsed, a single poll yields a single step, and the next one
/// is due `delay` after *that poll*, not after the previous deadline.
#[derive(Clone, Debug)]
pub struct TickScheduler {
    delay: Duration,
    last_step: Instant,
}

impl TickScheduler {
    pub fn new(delay: Duration, now: Instant) -> Self {
        Self {
            delay,
            last_step: now,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn last_step(&self) -> Instant {
        self.last_step
    }

    /// Returns whether a step is due at `now`. If it is, the schedule is rebased to `now`,
    /// whether or not the caller actually steps (a paused simulation still consumes the tick).
    ///
    /// An instant earlier than the last step counts as no time elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_step) < self.delay {
            return false;
        }

        self.last_step = now;

        true
    }
}
