//! Time source and timestamp helpers
//!
//! Every "now" in the crate goes through a [`Clock`], so the month a note
//! lands in, the edit timestamp and the default query window can all be
//! pinned in tests.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use parking_lot::Mutex;

/// Source of the current local wall-clock time
pub trait Clock: Send + Sync {
    /// Current local date-time
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that returns a settable instant
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    /// Create a clock frozen at `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Create a clock frozen at the given local date and time
    ///
    /// Returns `None` if the components do not form a valid date-time.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        let now = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;
        Some(Self::new(now))
    }

    /// Move the clock to `now`
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock() = now;
    }

    /// Move the clock forward by `by`
    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.lock();
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}

/// Drop seconds and sub-second precision
pub fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}
