//! Suspension-aware combinators.
//!
//! Two layers make mixed sync/async chains read top to bottom:
//!
//! - async methods on a resolved [`Outcome`] (`then_async` and friends) whose
//!   callbacks return futures;
//! - the [`PendingOutcome`] extension trait, implemented for every future that
//!   resolves to an `Outcome`, which lifts each combinator over the pending
//!   value.
//!
//! Nothing here spawns work or polls futures concurrently. Each combinator
//! awaits its input, then awaits its callback, so steps complete in the order
//! they are written.
//!
//! ```
//! use outcome_chain::{Outcome, PendingOutcome};
//!
//! async fn fetch(id: u32) -> Outcome<String> {
//!     Outcome::ok(format!("record-{id}"))
//! }
//!
//! let chain = async {
//!     Outcome::ok(7_u32)
//!         .then_async(fetch)
//!         .then(|record: String| Outcome::ok(record.len()))
//!         .finally_inspect(|outcome: &Outcome<usize>| assert!(outcome.is_successful()))
//!         .await
//! };
//! let length = futures_executor::block_on(chain);
//! assert_eq!(*length.value(), 8);
//! ```

use std::future::Future;

use tracing::trace;

use crate::Outcome;

impl<T> Outcome<T> {
    /// Async form of [`Outcome::then`]: awaits `step` only on success.
    pub async fn then_async<U, F>(self, step: F) -> Outcome<U>
    where
        U: Default,
        F: AsyncFnOnce(T) -> Outcome<U>,
    {
        if self.is_failure() {
            trace!(failure = self.message(), "skipping async step after failure");
            return self.carry(U::default());
        }
        step(self.into_value()).await
    }

    /// Async form of [`Outcome::catch`]: always awaits `handler`.
    pub async fn catch_async<U, F>(self, handler: F) -> Outcome<U>
    where
        F: AsyncFnOnce(Self) -> Outcome<U>,
    {
        trace!(
            successful = self.is_successful(),
            failure = self.message(),
            "running async catch handler"
        );
        handler(self).await
    }

    /// Async form of [`Outcome::finally`]: always awaits `finalizer`.
    pub async fn finally_async<U, F>(self, finalizer: F) -> Outcome<U>
    where
        F: AsyncFnOnce(Self) -> Outcome<U>,
    {
        trace!(successful = self.is_successful(), "running async finalizer");
        finalizer(self).await
    }

    /// Async form of [`Outcome::finally_inspect`]: awaits `finalizer`, then
    /// returns the outcome unchanged.
    pub async fn finally_inspect_async<F>(self, finalizer: F) -> Self
    where
        F: AsyncFnOnce(&Self),
    {
        trace!(successful = self.is_successful(), "running async finalizer");
        finalizer(&self).await;
        self
    }
}

/// Combinators over a future that resolves to an [`Outcome`].
///
/// Implemented for every `Future<Output = Outcome<T>>`, so the futures
/// returned by the async methods above chain directly. Each method awaits the
/// pending outcome before applying the same rules as its synchronous
/// counterpart.
///
/// `then` shares its name with `futures::FutureExt::then`; import only one of
/// the two traits in a scope that calls it.
pub trait PendingOutcome<T>: Future<Output = Outcome<T>> + Sized {
    /// Awaits the outcome, then applies [`Outcome::then`].
    fn then<U, F>(self, step: F) -> impl Future<Output = Outcome<U>>
    where
        U: Default,
        F: FnOnce(T) -> Outcome<U>,
    {
        async move { self.await.then(step) }
    }

    /// Awaits the outcome, then applies [`Outcome::catch`].
    fn catch<U, F>(self, handler: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(Outcome<T>) -> Outcome<U>,
    {
        async move { self.await.catch(handler) }
    }

    /// Awaits the outcome, then applies [`Outcome::finally`].
    fn finally<U, F>(self, finalizer: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(Outcome<T>) -> Outcome<U>,
    {
        async move { self.await.finally(finalizer) }
    }

    /// Awaits the outcome, then applies [`Outcome::finally_inspect`].
    fn finally_inspect<F>(self, finalizer: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Outcome<T>),
    {
        async move { self.await.finally_inspect(finalizer) }
    }

    /// Awaits the outcome, then applies [`Outcome::then_async`].
    fn then_async<U, F>(self, step: F) -> impl Future<Output = Outcome<U>>
    where
        U: Default,
        F: AsyncFnOnce(T) -> Outcome<U>,
    {
        async move { self.await.then_async(step).await }
    }

    /// Awaits the outcome, then applies [`Outcome::catch_async`].
    fn catch_async<U, F>(self, handler: F) -> impl Future<Output = Outcome<U>>
    where
        F: AsyncFnOnce(Outcome<T>) -> Outcome<U>,
    {
        async move { self.await.catch_async(handler).await }
    }

    /// Awaits the outcome, then applies [`Outcome::finally_async`].
    fn finally_async<U, F>(self, finalizer: F) -> impl Future<Output = Outcome<U>>
    where
        F: AsyncFnOnce(Outcome<T>) -> Outcome<U>,
    {
        async move { self.await.finally_async(finalizer).await }
    }

    /// Awaits the outcome, then applies [`Outcome::finally_inspect_async`].
    fn finally_inspect_async<F>(self, finalizer: F) -> impl Future<Output = Outcome<T>>
    where
        F: AsyncFnOnce(&Outcome<T>),
    {
        async move { self.await.finally_inspect_async(finalizer).await }
    }
}

impl<T, P> PendingOutcome<T> for P where P: Future<Output = Outcome<T>> {}
