//! Minimum-interval gate for user-triggered actions.

use std::time::{Duration, Instant};

/// Lets at most one action through per interval, to keep a trigger-happy
/// button from spamming the remote API. The first call always fires.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last_fired: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    /// Returns whether the action may run, using the real clock.
    pub fn try_fire(&mut self) -> bool {
        self.try_fire_at(Instant::now())
    }

    /// Clock-injected form of [`Throttle::try_fire`].
    pub fn try_fire_at(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_fired
            && now.saturating_duration_since(last) < self.interval
        {
            return false;
        }
        self.last_fired = Some(now);
        true
    }
}
