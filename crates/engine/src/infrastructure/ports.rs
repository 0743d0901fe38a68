//! Testability ports for injecting time and capturing reports.

use chrono::{DateTime, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Destination for human-readable reports ("Cassidy now knows the spell Lumos").
///
/// Use cases never print; they announce, and the composition root decides
/// whether that goes to the log, a buffer or nowhere.
#[cfg_attr(test, mockall::automock)]
pub trait AnnouncerPort: Send + Sync {
    fn announce(&self, message: &str);
}
