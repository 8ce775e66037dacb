//! State-scoped timers.
//!
//! Timers are plain values polled with the current instant. A screen state
//! owns at most one; replacing it on a transition is what cancels it.

use std::time::{Duration, Instant};

/// Fires once per `interval`, catching up one period per poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next_due: start + interval,
        }
    }

    /// Returns the due instant of the period that fired, if any. Call in a
    /// loop to drain missed periods.
    pub fn poll(&mut self, now: Instant) -> Option<Instant> {
        if now < self.next_due {
            return None;
        }
        let fired = self.next_due;
        self.next_due += self.interval;
        Some(fired)
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }
}

/// Fires once at `at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn after(duration: Duration, start: Instant) -> Self {
        Self {
            at: start + duration,
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now >= self.at
    }

    pub fn at(&self) -> Instant {
        self.at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateTimer {
    #[default]
    None,
    Ticker(Ticker),
    Deadline(Deadline),
}

impl StateTimer {
    /// Instant the timer next wants attention, for sizing the poll timeout.
    pub fn next_due(&self) -> Option<Instant> {
        match self {
            StateTimer::None => None,
            StateTimer::Ticker(t) => Some(t.next_due()),
            StateTimer::Deadline(d) => Some(d.at()),
        }
    }
}
