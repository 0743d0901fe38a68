//! Announcer implementations.

use std::sync::Mutex;

use crate::infrastructure::ports::AnnouncerPort;

/// Forwards every report to the log at info level.
#[derive(Debug, Default)]
pub struct TracingAnnouncer;

impl AnnouncerPort for TracingAnnouncer {
    fn announce(&self, message: &str) {
        tracing::info!(target: "kilmere_engine::announcer", "{message}");
    }
}

/// Keeps reports in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingAnnouncer {
    messages: Mutex<Vec<String>>,
}

impl RecordingAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything announced so far.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Drain and return everything announced so far.
    pub fn take(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl AnnouncerPort for RecordingAnnouncer {
    fn announce(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut guard) => guard.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_announcer_keeps_order_and_drains() {
        let announcer = RecordingAnnouncer::new();
        announcer.announce("first");
        announcer.announce("second");

        assert_eq!(announcer.messages(), vec!["first", "second"]);
        assert_eq!(announcer.take().len(), 2);
        assert!(announcer.messages().is_empty());
    }
}
