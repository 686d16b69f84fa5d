use std::time::Duration;

use mapdice_core::Timer;

/// Timer backed by an iced subscription.
///
/// Holds only the armed interval. [`App::subscription`](super::App::subscription)
/// maps it to `iced::time::every`; a new interval replaces the running
/// subscription and disarming drops it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubscriptionTimer {
    interval: Option<Duration>,
}

impl Timer for SubscriptionTimer {
    fn arm(&mut self, interval: Duration) {
        self.interval = Some(interval);
    }

    fn disarm(&mut self) {
        self.interval = None;
    }

    fn armed(&self) -> Option<Duration> {
        self.interval
    }
}
