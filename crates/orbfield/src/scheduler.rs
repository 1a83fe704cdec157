//! Two fixed-rate timers sharing one cooperative loop.

use std::time::{Duration, Instant};

/// A repeating deadline. Missed ticks are dropped, not queued.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    period: Duration,
    next: Instant,
}

impl Interval {
    /// First tick fires one `period` after `now`.
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    /// Time left until the next tick.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Consume the tick if it is due.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
        true
    }
}

/// Which tasks are due this turn of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Due {
    pub render: bool,
    pub geometry: bool,
}

/// Render and geometry timers.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    render: Interval,
    geometry: Interval,
}

impl Scheduler {
    pub fn new(render: Duration, geometry: Duration, now: Instant) -> Self {
        Self {
            render: Interval::new(render, now),
            geometry: Interval::new(geometry, now),
        }
    }

    /// How long the loop may wait for input before something is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.render.remaining(now).min(self.geometry.remaining(now))
    }

    pub fn poll(&mut self, now: Instant) -> Due {
        Due {
            render: self.render.fire(now),
            geometry: self.geometry.fire(now),
        }
    }
}
