//! Possibly-deferred callbacks.
//!
//! A [`Producer`] is a callback that is invoked once with an input and always
//! yields a future. Plain functions are producers as they are, their result
//! resolving immediately; suspending callbacks are marked with [`deferred`].
//! Every async combinator is written once against this trait, so the same
//! method accepts both kinds of callback.

use core::future::{ready, Future, IntoFuture, Ready};

/// A callback that may be synchronous or asynchronous.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::async_ext::{deferred, Producer};
///
/// async fn run() {
///     let sync_result = (|x: i32| x + 1).produce(1).await;
///     let async_result = deferred(|x: i32| async move { x + 1 }).produce(1).await;
///     assert_eq!(sync_result, async_result);
/// }
/// ```
pub trait Producer<A> {
    /// The value eventually produced.
    type Output;

    /// The future yielding [`Output`](Producer::Output).
    type Future: Future<Output = Self::Output>;

    /// Invokes the callback with `input`.
    fn produce(self, input: A) -> Self::Future;
}

impl<F, A, O> Producer<A> for F
where
    F: FnOnce(A) -> O,
{
    type Output = O;
    type Future = Ready<O>;

    #[inline]
    fn produce(self, input: A) -> Self::Future {
        ready(self(input))
    }
}

/// A suspending callback, created by [`deferred`].
///
/// Wraps a function returning a future (or anything implementing
/// [`IntoFuture`]) so that the combinators await its result instead of
/// treating the future itself as the produced value. Without the wrapper a
/// closure returning a future is a plain producer whose output is the
/// unpolled future.
#[derive(Clone, Copy, Debug)]
#[must_use = "producers do nothing unless passed to a combinator"]
pub struct Deferred<F> {
    f: F,
}

impl<F, A, Fut> Producer<A> for Deferred<F>
where
    F: FnOnce(A) -> Fut,
    Fut: IntoFuture,
{
    type Output = Fut::Output;
    type Future = Fut::IntoFuture;

    #[inline]
    fn produce(self, input: A) -> Self::Future {
        (self.f)(input).into_future()
    }
}

/// Marks `f` as a suspending callback.
///
/// The callback is not invoked here; a combinator calls it at most once, and
/// only when the outcome selects it.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::prelude_async::*;
///
/// async fn load(id: u32) -> Outcome<String, &'static str> {
///     Outcome::success(format!("user-{}", id))
/// }
///
/// async fn run() {
///     let name = Outcome::<u32, &str>::success(7).bind_async(deferred(load)).await;
///     assert_eq!(name, Outcome::Success("user-7".to_string()));
/// }
/// ```
#[inline]
pub fn deferred<A, F, Fut>(f: F) -> Deferred<F>
where
    F: FnOnce(A) -> Fut,
    Fut: IntoFuture,
{
    Deferred { f }
}
