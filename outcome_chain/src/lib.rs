//! Success/failure outcomes with chainable combinators.
//!
//! An [`Outcome`] records whether a step succeeded, an optional message
//! (mandatory on failure) and, for `Outcome<T>`, a carried value. Chains are
//! built from three combinators:
//!
//! - `then` runs the next step only if everything so far succeeded;
//! - `catch` always runs, and decides how the chain continues;
//! - `finally` always runs, for cleanup and reporting.
//!
//! Each has an async form, and [`PendingOutcome`] lifts them over futures so
//! chains can mix synchronous and asynchronous steps without awaiting between
//! every call.
//!
//! ```
//! use outcome_chain::{Outcome, get_outcome};
//!
//! let mut log = None;
//! let result: Outcome<String> = get_outcome(Some(String::from("First Line\n")))
//!     .then(|text| Outcome::ok_with(text + "Second Line\n", "second line added"))
//!     .then(|text| Outcome::fail_with("ran out of lines", text))
//!     .catch(|so_far| {
//!         if so_far.is_successful() {
//!             return so_far;
//!         }
//!         log = so_far.message().map(str::to_owned);
//!         Outcome::fail_with("could not finish the document", so_far.into_value())
//!     });
//!
//! assert!(result.is_failure());
//! assert_eq!(result.message(), Some("could not finish the document"));
//! assert_eq!(result.value(), "First Line\nSecond Line\n");
//! assert_eq!(log.as_deref(), Some("ran out of lines"));
//! ```
//!
//! Building a failing outcome without a message is a programming error: the
//! panicking constructors report it immediately, and their `try_*` twins
//! return [`OutcomeError::InvalidConstruction`] instead.

mod combinator;
mod error;
pub mod lift;
mod outcome;

pub use combinator::pending::PendingOutcome;
pub use error::{Failure, OutcomeError};
pub use lift::{IntoOutcome, get_outcome, get_outcome_async};
pub use outcome::{Blank, Outcome};
