//! Timer abstraction driven by the picker.
//!
//! ## Learning: Declarative Timers
//!
//! In an Elm-style UI the timer is not an object you start and stop; it
//! is a subscription derived from state. [`Timer`] bridges the two: the
//! picker arms and disarms it imperatively, and the UI reads
//! [`Timer::armed`] when it rebuilds its subscriptions.

use std::time::Duration;

/// A one-interval repeating timer.
pub trait Timer {
    /// Starts the timer, or changes its interval if already running.
    fn arm(&mut self, interval: Duration);

    /// Stops the timer. No further ticks are expected.
    fn disarm(&mut self);

    /// The current interval, if running.
    fn armed(&self) -> Option<Duration>;
}

/// What happened to a [`ManualTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCall {
    Arm(Duration),
    Disarm,
}

/// Timer that only records calls. Ticks are delivered by hand.
#[derive(Debug, Default, Clone)]
pub struct ManualTimer {
    interval: Option<Duration>,
    calls: Vec<TimerCall>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every arm/disarm call in order.
    pub fn calls(&self) -> &[TimerCall] {
        &self.calls
    }
}

impl Timer for ManualTimer {
    fn arm(&mut self, interval: Duration) {
        self.interval = Some(interval);
        self.calls.push(TimerCall::Arm(interval));
    }

    fn disarm(&mut self) {
        self.interval = None;
        self.calls.push(TimerCall::Disarm);
    }

    fn armed(&self) -> Option<Duration> {
        self.interval
    }
}
