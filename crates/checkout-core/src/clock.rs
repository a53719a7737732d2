//! # Clock
//!
//! Expiry checks need "now". Reading the wall clock inside the domain would
//! make expired and fresh items impossible to test deterministically, so the
//! time source is passed in.
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use checkout_core::clock::{Clock, FixedClock, SystemClock};
//!
//! let fixed = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
//! assert_eq!(fixed.now().timestamp(), 1_704_067_200);
//!
//! let later = fixed.advanced(Duration::days(7));
//! assert!(later.now() > fixed.now());
//!
//! let _real = SystemClock.now();
//! ```

use chrono::{DateTime, Duration, Utc};

/// A source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant. Used by tests and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub const fn new(now: DateTime<Utc>) -> Self {
        FixedClock(now)
    }

    /// Returns a clock moved forward (or back, for negative durations).
    pub fn advanced(&self, by: Duration) -> Self {
        FixedClock(self.0 + by)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
