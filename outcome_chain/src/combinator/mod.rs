//! Combinators for chaining outcomes.
//!
//! - [`Outcome::then`] runs the next step only while everything so far has
//!   succeeded.
//! - [`Outcome::catch`] always runs its handler, which decides whether the
//!   chain continues as a success or a failure.
//! - [`Outcome::finally`] and [`Outcome::finally_inspect`] always run their
//!   callback, for cleanup or reporting that must happen on every path.
//!
//! Asynchronous counterparts live in [`pending`].

pub mod pending;

use tracing::trace;

use crate::Outcome;

impl<T> Outcome<T> {
    /// Runs `step` with the carried value if this outcome succeeded.
    ///
    /// A failing outcome short-circuits: `step` is not called and the failure
    /// message is propagated with the default value of `U`. A successful
    /// outcome returns exactly what `step` returns.
    ///
    /// ```
    /// use outcome_chain::Outcome;
    ///
    /// let parsed: Outcome<u16> = Outcome::ok("8080")
    ///     .then(|raw: &str| match raw.parse::<u16>() {
    ///         Ok(port) => Outcome::ok(port),
    ///         Err(err) => Outcome::fail(err.to_string()),
    ///     });
    /// assert_eq!(*parsed.value(), 8080);
    ///
    /// let skipped: Outcome<u16> = Outcome::<&str>::fail("no input")
    ///     .then(|_| unreachable!("a failed chain never runs later steps"));
    /// assert_eq!(skipped.message(), Some("no input"));
    /// ```
    pub fn then<U, F>(self, step: F) -> Outcome<U>
    where
        U: Default,
        F: FnOnce(T) -> Outcome<U>,
    {
        if self.is_failure() {
            trace!(failure = self.message(), "skipping step after failure");
            return self.carry(U::default());
        }
        step(self.into_value())
    }

    /// Hands the outcome to `handler` whatever its status.
    ///
    /// The handler owns the decision: it may turn a failure back into a
    /// success, replace the message, log and pass the failure on, or change
    /// the carried type.
    ///
    /// ```
    /// use outcome_chain::Outcome;
    ///
    /// let recovered: Outcome<u32> = Outcome::<u32>::fail("cache miss")
    ///     .catch(|outcome| {
    ///         if outcome.is_successful() {
    ///             return outcome;
    ///         }
    ///         Outcome::ok_with(0, "fell back to zero")
    ///     });
    /// assert!(recovered.is_successful());
    /// ```
    pub fn catch<U, F>(self, handler: F) -> Outcome<U>
    where
        F: FnOnce(Self) -> Outcome<U>,
    {
        trace!(
            successful = self.is_successful(),
            failure = self.message(),
            "running catch handler"
        );
        handler(self)
    }

    /// Hands the outcome to `finalizer` whatever its status and returns the
    /// finalizer's result.
    ///
    /// The finalizer receives the outcome as it stands: same status, message
    /// and value.
    pub fn finally<U, F>(self, finalizer: F) -> Outcome<U>
    where
        F: FnOnce(Self) -> Outcome<U>,
    {
        trace!(successful = self.is_successful(), "running finalizer");
        finalizer(self)
    }

    /// Lets `finalizer` observe the outcome, then returns it unchanged.
    ///
    /// ```
    /// use outcome_chain::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let outcome: Outcome = Outcome::fail("disk full")
    ///     .finally_inspect(|o| seen.push(o.message().map(str::to_owned)));
    /// assert!(outcome.is_failure());
    /// assert_eq!(seen, vec![Some(String::from("disk full"))]);
    /// ```
    pub fn finally_inspect<F>(self, finalizer: F) -> Self
    where
        F: FnOnce(&Self),
    {
        trace!(successful = self.is_successful(), "running finalizer");
        finalizer(&self);
        self
    }
}
