//! The success/failure value at the centre of the crate.

mod blank;
mod constructors;
#[cfg(feature = "serde")]
mod wire;

pub use blank::Blank;

use crate::error::Failure;

/// Result of a step that either succeeded or failed with an explanation.
///
/// `Outcome` without a type argument is the valueless shape
/// (`Outcome<()>`); `Outcome<T>` carries a value of type `T` on both paths.
/// A failing outcome may carry the type's default value when the producer had
/// nothing better to offer.
///
/// Every failing outcome has a non-blank message. The constructors enforce
/// this, so the combinators never need to check it again.
///
/// # Default values
///
/// Any operation that has to invent a value for a failure requires
/// `T: Default`. This covers [`Outcome::fail`], [`Outcome::fail_from`] and
/// their `try_*` forms. It also covers [`Outcome::then`] and
/// [`Outcome::then_async`], whose step output type `U` must be `Default`
/// so a skipped step can still yield an `Outcome<U>`. The
/// [`IntoOutcome`](crate::IntoOutcome) lifts for `Option<T>` and
/// `Result<T, E>` need it too. For a value type without a sensible default,
/// build failures with [`Outcome::fail_with`] and recover with
/// [`Outcome::catch`], neither of which needs `Default`.
///
/// ```
/// use outcome_chain::Outcome;
///
/// let saved: Outcome<u32> = Outcome::ok_with(7, "row saved");
/// assert!(saved.is_successful());
/// assert_eq!(saved.message(), Some("row saved"));
/// assert_eq!(*saved.value(), 7);
///
/// let missing: Outcome<u32> = Outcome::fail("row not found");
/// assert!(missing.is_failure());
/// assert_eq!(*missing.value(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "wire::RawOutcome<T>")
)]
#[must_use]
pub struct Outcome<T = ()> {
    successful: bool,
    message: Option<String>,
    value: T,
}

impl<T> Outcome<T> {
    /// Assembles an outcome whose invariant the caller already guarantees.
    ///
    /// Only used where the message is known to be non-blank: propagated from
    /// another failing outcome, or a crate constant.
    pub(crate) const fn from_parts(successful: bool, message: Option<String>, value: T) -> Self {
        Self {
            successful,
            message,
            value,
        }
    }

    /// Keeps the status and message, swapping the carried value.
    pub(crate) fn carry<U>(self, value: U) -> Outcome<U> {
        Outcome::from_parts(self.successful, self.message, value)
    }

    /// Whether the step succeeded.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        self.successful
    }

    /// Whether the step failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.successful
    }

    /// Message attached by the producer; always present on failure.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Borrow the carried value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the outcome, returning the carried value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consumes the outcome, returning `(successful, message, value)`.
    #[must_use]
    pub fn into_parts(self) -> (bool, Option<String>, T) {
        (self.successful, self.message, self.value)
    }

    /// Leaves the outcome world, converting into a standard [`Result`].
    ///
    /// Successful outcomes yield their value. Failing outcomes yield a
    /// [`Failure`] holding the message; the carried value is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Failure`] when the outcome is failing.
    ///
    /// ```
    /// use outcome_chain::Outcome;
    ///
    /// let failed: Outcome<u8> = Outcome::fail("quota exceeded");
    /// let err = failed.into_result().unwrap_err();
    /// assert_eq!(err.message(), "quota exceeded");
    /// ```
    pub fn into_result(self) -> Result<T, Failure> {
        if self.successful {
            Ok(self.value)
        } else {
            Err(Failure::new(self.message.unwrap_or_default()))
        }
    }
}

impl<T: Blank> Outcome<T> {
    /// Whether the carried value is present and, for text, not blank.
    ///
    /// ```
    /// use outcome_chain::Outcome;
    ///
    /// assert!(Outcome::ok(String::from("data")).has_value());
    /// assert!(!Outcome::ok(String::from("  ")).has_value());
    /// assert!(!Outcome::ok(None::<u8>).has_value());
    /// ```
    #[must_use]
    pub fn has_value(&self) -> bool {
        !self.value.is_blank()
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
