//! Injected time sources.
//!
//! Time-gated nodes ask a [`TimeSource`] for "now" instead of a global clock, which keeps
//! evaluation host-agnostic and lets tests step time by hand.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Monotonic time in seconds. The epoch is up to the implementation.
pub trait TimeSource {
    fn now(&self) -> f64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: f64) -> Self {
        Self { now }
    }

    /// Advance by `dt` seconds. Negative steps are ignored so the clock stays monotonic.
    pub fn advance(&mut self, dt: f64) {
        if dt > 0.0 {
            self.now += dt;
        }
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> f64 {
        self.now
    }
}
