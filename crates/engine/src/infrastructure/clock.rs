//! Clock implementations.

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::infrastructure::ports::ClockPort;

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Midsummer of the given year. `None` if the year is out of chrono's range.
    pub fn in_year(year: i32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, 7, 1, 12, 0, 0).single().map(Self)
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The calendar year every derived age is computed against.
pub fn as_of_year(clock: &dyn ClockPort) -> i32 {
    clock.now().year()
}
