//! Tracing integration for outcome-rail.
//!
//! This module records resolved outcomes as `tracing` events: a `debug`
//! event when an operation succeeds and a `warn` event carrying the error
//! when it fails. Outcomes pass through unchanged.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Debug;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::types::Outcome;

/// Extension trait for logging an outcome that is already resolved.
///
/// # Example
///
/// ```rust
/// use outcome_rail::async_ext::OutcomeTraceExt;
/// use outcome_rail::Outcome;
///
/// let outcome = Outcome::<i32, &str>::failure("disk full").trace_outcome("save_report");
/// assert!(outcome.is_failure());
/// ```
pub trait OutcomeTraceExt {
    /// Emits an event describing this outcome and returns it unchanged.
    fn trace_outcome(self, operation: &'static str) -> Self;
}

impl<T, E: Debug> OutcomeTraceExt for Outcome<T, E> {
    fn trace_outcome(self, operation: &'static str) -> Self {
        record(operation, &self);
        self
    }
}

/// Extension trait for logging outcomes that resolve later.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::prelude_async::*;
/// use tracing::info_span;
///
/// async fn fetch_user(id: u64) -> Outcome<User, ApiError> {
///     load_user(id)
///         .traced_in("fetch_user", info_span!("fetch_user", user_id = id))
///         .await
/// }
/// ```
pub trait FutureOutcomeTraceExt<T, E>: IntoFuture<Output = Outcome<T, E>> + Sized {
    /// Records the resolved outcome within the current span.
    fn traced(self, operation: &'static str) -> TracedOutcome<Self::IntoFuture> {
        self.traced_in(operation, Span::current())
    }

    /// Polls the receiver inside `span` and records the resolved outcome there.
    fn traced_in(self, operation: &'static str, span: Span) -> TracedOutcome<Self::IntoFuture> {
        TracedOutcome { inner: self.into_future(), span, operation }
    }
}

impl<Fut, T, E> FutureOutcomeTraceExt<T, E> for Fut where Fut: IntoFuture<Output = Outcome<T, E>> {}

pin_project! {
    /// Future that records the outcome of its inner future.
    ///
    /// Created by [`FutureOutcomeTraceExt::traced`] or
    /// [`FutureOutcomeTraceExt::traced_in`].
    #[must_use = "futures do nothing unless polled"]
    pub struct TracedOutcome<F> {
        #[pin]
        inner: F,
        span: Span,
        operation: &'static str,
    }
}

impl<F, T, E> Future for TracedOutcome<F>
where
    F: Future<Output = Outcome<T, E>>,
    E: Debug,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _entered = this.span.enter();

        match this.inner.poll(cx) {
            Poll::Ready(outcome) => {
                record(*this.operation, &outcome);
                Poll::Ready(outcome)
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

fn record<T, E: Debug>(operation: &'static str, outcome: &Outcome<T, E>) {
    match outcome {
        Outcome::Success(_) => tracing::debug!(operation, "operation succeeded"),
        Outcome::Failure(error) => tracing::warn!(operation, error = ?error, "operation failed"),
    }
}
