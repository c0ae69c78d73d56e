//! Single-threaded executor helpers for driving async chains in tests.
//!
//! [`run`] blocks the current thread on a future using
//! [`futures_executor::block_on`]. [`yield_now`] returns `Pending` exactly once
//! so a test can place a genuine suspension point inside a step.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Drives `future` to completion on the current thread.
pub fn run<F: Future>(future: F) -> F::Output {
    futures_executor::block_on(future)
}

/// Future that suspends once before completing.
#[derive(Debug, Default)]
#[must_use = "futures do nothing unless awaited"]
pub struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Suspends the calling task once, rescheduling it immediately.
pub const fn yield_now() -> YieldNow {
    YieldNow { yielded: false }
}
