//! Lifting plain values into outcomes.
//!
//! [`get_outcome`] starts a chain from a value that may be absent. Absence is
//! explicit: `None`, an `Err`, or (with the `uuid` feature) the nil
//! identifier. Present values become successful outcomes.

use std::fmt::Display;
use std::future::Future;

use tracing::trace;

use crate::Outcome;

/// Failure message used when there is no value to lift.
pub const NOTHING_TO_GET: &str = "Nothing to get outcome with";

/// Failure message used when an identifier is the nil value.
#[cfg(feature = "uuid")]
pub const NIL_IDENTIFIER: &str = "The identifier provided was the default (nil) value and invalid";

/// Conversion into an [`Outcome`], failing when the value is absent.
pub trait IntoOutcome {
    /// Type carried by the resulting outcome.
    type Value;

    /// Lifts `self` into an outcome.
    fn into_outcome(self) -> Outcome<Self::Value>;
}

/// Builds the failing outcome for an absent value.
fn absent<T: Default>(message: &str) -> Outcome<T> {
    trace!(reason = message, "no value to lift");
    Outcome::from_parts(false, Some(message.to_owned()), T::default())
}

impl<T: Default> IntoOutcome for Option<T> {
    type Value = T;

    fn into_outcome(self) -> Outcome<T> {
        self.map_or_else(|| absent(NOTHING_TO_GET), Outcome::ok)
    }
}

impl<T: Default, E: Display> IntoOutcome for Result<T, E> {
    type Value = T;

    /// `Err` values fail with the error's rendering; an error that renders
    /// blank falls back to [`NOTHING_TO_GET`].
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(err) => Outcome::try_fail(err.to_string())
                .unwrap_or_else(|_| absent(NOTHING_TO_GET)),
        }
    }
}

#[cfg(feature = "uuid")]
impl IntoOutcome for uuid::Uuid {
    type Value = Self;

    fn into_outcome(self) -> Outcome<Self> {
        if self.is_nil() {
            return absent(NIL_IDENTIFIER);
        }
        Outcome::ok(self)
    }
}

/// Lifts `value` into an outcome, failing when it is absent.
///
/// ```
/// use outcome_chain::{get_outcome, lift::NOTHING_TO_GET};
///
/// let present = get_outcome(Some("config.toml"));
/// assert_eq!(*present.value(), "config.toml");
///
/// let missing = get_outcome(None::<&str>);
/// assert_eq!(missing.message(), Some(NOTHING_TO_GET));
/// ```
pub fn get_outcome<V: IntoOutcome>(value: V) -> Outcome<V::Value> {
    value.into_outcome()
}

/// Awaits `pending`, then lifts its output with [`get_outcome`].
pub async fn get_outcome_async<F>(pending: F) -> Outcome<<F::Output as IntoOutcome>::Value>
where
    F: Future,
    F::Output: IntoOutcome,
{
    get_outcome(pending.await)
}
