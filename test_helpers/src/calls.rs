//! Invocation counters for asserting how often a callback ran.
//!
//! A [`CallCounter`] is cheap to clone; every clone shares the same tally, so
//! one handle can move into a closure while the test keeps another.
//!
//! # Examples
//!
//! ```
//! use outcome_chain_test_helpers::calls::CallCounter;
//!
//! let counter = CallCounter::default();
//! let handle = counter.clone();
//! let step = move || handle.tick();
//! step();
//! assert_eq!(counter.count(), 1);
//! ```

use std::sync::Arc;

use anyhow::{Result, ensure};
use parking_lot::Mutex;

/// Shared tally of callback invocations.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    hits: Arc<Mutex<usize>>,
}

impl CallCounter {
    /// Records one invocation.
    pub fn tick(&self) {
        *self.hits.lock() += 1;
    }

    /// Returns the number of recorded invocations.
    #[must_use]
    pub fn count(&self) -> usize {
        *self.hits.lock()
    }

    /// Checks that exactly `expected` invocations were recorded.
    ///
    /// # Errors
    ///
    /// Returns an error naming `label` when the tally differs.
    pub fn ensure_exactly(&self, label: &str, expected: usize) -> Result<()> {
        let observed = self.count();
        ensure!(
            observed == expected,
            "{label}: expected {expected} invocation(s) but observed {observed}"
        );
        Ok(())
    }
}
