//! Tower integration for outcome-rail.
//!
//! This module provides a Tower `Layer` and `Service` that turn the errors a
//! service returns from `call` into [`Outcome::Failure`] values, so handlers
//! can keep composing them with the combinators instead of branching on the
//! service error.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use outcome_rail::tower::OutcomeLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(OutcomeLayer::new())
//!     .service(my_service);
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::types::Outcome;

/// A Tower [`Layer`] that wraps services in [`OutcomeService`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OutcomeLayer;

impl OutcomeLayer {
    /// Creates a new `OutcomeLayer`.
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for OutcomeLayer {
    type Service = OutcomeService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        OutcomeService::new(inner)
    }
}

/// A Tower [`Service`] responding with an [`Outcome`].
///
/// A failed call resolves to `Ok(Outcome::Failure(error))`. Readiness
/// errors from `poll_ready` are not business failures and are still returned
/// as service errors.
#[derive(Clone, Debug)]
pub struct OutcomeService<S> {
    inner: S,
}

impl<S> OutcomeService<S> {
    /// Creates a new `OutcomeService` wrapping the given service.
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, Request> Service<Request> for OutcomeService<S>
where
    S: Service<Request>,
{
    type Response = Outcome<S::Response, S::Error>;
    type Error = S::Error;
    type Future = OutcomeResponseFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        OutcomeResponseFuture { inner: self.inner.call(request) }
    }
}

pin_project! {
    /// Future returned by [`OutcomeService`].
    ///
    /// Resolves to `Ok` whatever the inner future returns, with the inner
    /// result converted into an [`Outcome`].
    #[must_use = "futures do nothing unless polled"]
    pub struct OutcomeResponseFuture<F> {
        #[pin]
        inner: F,
    }
}

impl<F, T, E> Future for OutcomeResponseFuture<F>
where
    F: Future<Output = Result<T, E>>,
{
    type Output = Result<Outcome<T, E>, E>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(cx).map(|result| Ok(result.into()))
    }
}

impl<F, T, E> FusedFuture for OutcomeResponseFuture<F>
where
    F: FusedFuture<Output = Result<T, E>>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}

/// Extension trait for wrapping a service in [`OutcomeService`].
pub trait ServiceOutcomeExt<Request>: Service<Request> + Sized {
    /// Wraps this service so that call failures become [`Outcome::Failure`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use outcome_rail::tower::ServiceOutcomeExt;
    ///
    /// let wrapped = my_service.into_outcome_service();
    /// ```
    fn into_outcome_service(self) -> OutcomeService<Self> {
        OutcomeService::new(self)
    }
}

impl<S, Request> ServiceOutcomeExt<Request> for S where S: Service<Request> {}
