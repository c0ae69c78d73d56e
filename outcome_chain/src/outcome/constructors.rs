//! Constructors for [`Outcome`].
//!
//! Every failing constructor comes in two forms: a `try_*` form returning
//! [`OutcomeError::InvalidConstruction`] for a blank message, and a panicking
//! form for call sites where a blank message is a programming error.

use tracing::debug;

use super::Outcome;
use crate::error::OutcomeError;

/// Accepts `message` when it contains something other than whitespace.
fn require_message(message: Option<String>) -> Result<String, OutcomeError> {
    match message {
        Some(text) if !text.trim().is_empty() => Ok(text),
        other => {
            debug!(candidate = ?other, "rejecting failing outcome without a message");
            Err(OutcomeError::InvalidConstruction)
        }
    }
}

#[track_caller]
fn or_panic<T>(result: Result<T, OutcomeError>) -> T {
    match result {
        Ok(outcome) => outcome,
        Err(err) => panic!("{err}"),
    }
}

impl<T> Outcome<T> {
    /// Builds an outcome from its raw parts, validating the invariant.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidConstruction`] when `successful` is
    /// `false` and `message` is absent or blank.
    pub fn try_new(
        successful: bool,
        message: Option<String>,
        value: T,
    ) -> Result<Self, OutcomeError> {
        if successful {
            return Ok(Self::from_parts(true, message, value));
        }
        let text = require_message(message)?;
        Ok(Self::from_parts(false, Some(text), value))
    }

    /// Builds an outcome from its raw parts.
    ///
    /// # Panics
    ///
    /// Panics when `successful` is `false` and `message` is absent or blank.
    #[track_caller]
    pub fn new(successful: bool, message: Option<String>, value: T) -> Self {
        or_panic(Self::try_new(successful, message, value))
    }

    /// Successful outcome carrying `value` and no message.
    ///
    /// The valueless shape is `Outcome::ok(())`.
    pub const fn ok(value: T) -> Self {
        Self::from_parts(true, None, value)
    }

    /// Successful outcome carrying `value` and `message`.
    pub fn ok_with(value: T, message: impl Into<String>) -> Self {
        Self::from_parts(true, Some(message.into()), value)
    }

    /// Re-stamps `prior` as successful with no message, keeping its value.
    ///
    /// `prior`'s own status and message are discarded.
    pub fn ok_from(prior: Self) -> Self {
        Self::from_parts(true, None, prior.value)
    }

    /// Re-stamps `prior` as successful with `message`, keeping its value.
    ///
    /// ```
    /// use outcome_chain::Outcome;
    ///
    /// let repaired = Outcome::ok_from_with(Outcome::fail_with("stale", 3_u8), "refreshed");
    /// assert!(repaired.is_successful());
    /// assert_eq!(repaired.message(), Some("refreshed"));
    /// assert_eq!(*repaired.value(), 3);
    /// ```
    pub fn ok_from_with(prior: Self, message: impl Into<String>) -> Self {
        Self::from_parts(true, Some(message.into()), prior.value)
    }

    /// Failing outcome carrying `value`.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidConstruction`] when `message` is blank.
    pub fn try_fail_with(message: impl Into<String>, value: T) -> Result<Self, OutcomeError> {
        Self::try_new(false, Some(message.into()), value)
    }

    /// Failing outcome carrying `value`.
    ///
    /// # Panics
    ///
    /// Panics when `message` is blank. Use [`Outcome::try_fail_with`] when the
    /// message comes from untrusted input.
    #[track_caller]
    pub fn fail_with(message: impl Into<String>, value: T) -> Self {
        or_panic(Self::try_fail_with(message, value))
    }
}

impl<T: Default> Outcome<T> {
    /// Failing outcome carrying the default value of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidConstruction`] when `message` is blank.
    pub fn try_fail(message: impl Into<String>) -> Result<Self, OutcomeError> {
        Self::try_fail_with(message, T::default())
    }

    /// Failing outcome carrying the default value of `T`.
    ///
    /// # Panics
    ///
    /// Panics when `message` is blank.
    ///
    /// ```should_panic
    /// use outcome_chain::Outcome;
    ///
    /// let _: Outcome = Outcome::fail("   ");
    /// ```
    #[track_caller]
    pub fn fail(message: impl Into<String>) -> Self {
        or_panic(Self::try_fail(message))
    }

    /// Re-stamps `prior` as failing with `message`.
    ///
    /// The value is copied from `prior` when one is given, otherwise the
    /// default value of `T` is used.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidConstruction`] when `message` is blank.
    pub fn try_fail_from(
        message: impl Into<String>,
        prior: Option<Self>,
    ) -> Result<Self, OutcomeError> {
        let value = prior.map_or_else(T::default, Self::into_value);
        Self::try_fail_with(message, value)
    }

    /// Re-stamps `prior` as failing with `message`.
    ///
    /// # Panics
    ///
    /// Panics when `message` is blank.
    #[track_caller]
    pub fn fail_from(message: impl Into<String>, prior: Option<Self>) -> Self {
        or_panic(Self::try_fail_from(message, prior))
    }
}
