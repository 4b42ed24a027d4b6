// SPDX-License-Identifier: MPL-2.0
//! Time sources for notification expiry.
//!
//! The manager never reads the system time directly; it asks a [`Clock`] for
//! the time elapsed since the clock's origin. Tests inject a [`ManualClock`]
//! and advance it explicitly instead of sleeping.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, SystemTime};

/// Source of the current time, as an offset from a fixed origin.
pub trait Clock {
    /// Time elapsed since the clock's origin. Never decreases.
    fn now(&self) -> Duration;
}

/// Wall-clock time since construction.
///
/// Based on `SystemTime` so suspended time counts towards expiry. A system
/// clock stepping backwards holds the reading at its last value.
#[derive(Debug)]
pub struct SystemClock {
    origin: SystemTime,
    last: Cell<Duration>,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: SystemTime::now(),
            last: Cell::new(Duration::ZERO),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        let elapsed = SystemTime::now()
            .duration_since(self.origin)
            .unwrap_or_default();
        let now = elapsed.max(self.last.get());
        self.last.set(now);
        now
    }
}

/// Manually advanced clock. Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Rc<Cell<Duration>>);

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        self.0.set(self.0.get() + step);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.0.get()
    }
}
