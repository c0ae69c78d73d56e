//! Capturing sink standing in for an application logger in tests.
//!
//! Chains under test push strings into a [`LogSink`]; assertions then inspect
//! the recorded entries in insertion order. Ordering tests use the same sink
//! as a journal of step labels.

use std::sync::Arc;

use parking_lot::Mutex;

/// Thread-safe, clonable list of recorded log lines.
#[derive(Debug, Clone, Default)]
pub struct LogSink {
    entries: Arc<Mutex<Vec<String>>>,
}

impl LogSink {
    /// Appends `entry` to the sink.
    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().push(entry.into());
    }

    /// Returns a snapshot of every recorded entry.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Returns the most recent entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.entries.lock().last().cloned()
    }

    /// Returns `true` when no entry has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Returns `true` when any recorded entry contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.lock().iter().any(|entry| entry.contains(needle))
    }
}
