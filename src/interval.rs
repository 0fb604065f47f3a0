//! Non-blocking periodic deadline.
//!
//! [`Interval`] answers "has another period passed?" from the main loop
//! without busy-waiting, e.g. to blink a heartbeat LED while inputs keep
//! being polled.

use crate::time::{TimeInstant, TimeSource};

/// Fires once every `period`, measured on a shared time source.
pub struct Interval<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    period: I::Duration,
    previous: I,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> Interval<'t, I, T> {
    /// Creates an interval whose first period starts now.
    pub fn new(time_source: &'t T, period: I::Duration) -> Self {
        Self {
            time_source,
            period,
            previous: time_source.now(),
        }
    }

    /// Returns true if at least one period has passed since the last time it
    /// returned true, and starts the next period.
    ///
    /// The next period is measured from the moment of this call, so a late
    /// poll delays later deadlines rather than firing twice.
    pub fn elapsed(&mut self) -> bool {
        let now = self.time_source.now();
        if now.duration_since(self.previous) >= self.period {
            self.previous = now;
            true
        } else {
            false
        }
    }

    /// Restarts the current period from now.
    pub fn reset(&mut self) {
        self.previous = self.time_source.now();
    }

    /// Returns the configured period.
    pub fn period(&self) -> I::Duration {
        self.period
    }
}
