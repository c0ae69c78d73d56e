//! Error types raised at the edges of the outcome model.
//!
//! Domain failures live inside [`Outcome`](crate::Outcome) as data. The types
//! here cover the two places where that model meets ordinary Rust errors:
//! rejecting an invalid construction, and leaving the outcome world through
//! [`Outcome::into_result`](crate::Outcome::into_result).

use thiserror::Error;

/// Contract violations detected while building an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OutcomeError {
    /// A failing outcome was requested without a usable message.
    ///
    /// Raised when the message is absent, empty, or whitespace-only.
    #[error("no error message provided for a non-successful outcome")]
    InvalidConstruction,
}

/// Domain failure carried out of a failing outcome.
///
/// The value the outcome carried is dropped; only the message survives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
}

impl Failure {
    pub(crate) const fn new(message: String) -> Self {
        Self { message }
    }

    /// Message explaining the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the failure, returning its message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}
