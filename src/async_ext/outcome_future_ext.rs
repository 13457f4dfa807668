//! Async combinators over immediate and deferred outcomes.
//!
//! [`Outcome`] implements [`IntoFuture`], resolving on the first poll, so a
//! single extension trait serves both an `Outcome` already at hand and any
//! future that eventually yields one. Together with [`Producer`] on the
//! callback side this covers every combination of immediate or deferred
//! receiver with synchronous or suspending callback.

use core::future::{ready, Future, IntoFuture, Ready};

use crate::types::Outcome;

use super::producer::Producer;

impl<T, E> IntoFuture for Outcome<T, E> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    #[inline]
    fn into_future(self) -> Self::IntoFuture {
        ready(self)
    }
}

/// Extension trait providing the async combinators.
///
/// Every method first awaits the receiver, then inspects the variant, and
/// invokes only the callback that variant selects. A callback that is not
/// selected is dropped without being called. Errors are forwarded unchanged;
/// panics raised by callbacks propagate to the caller, and dropping the
/// returned future drops whatever is still running.
///
/// # Suspending callbacks
///
/// A plain closure is a synchronous producer even when it returns a future:
/// `map_async(|x: i32| async move { x + 1 })` yields a success *holding* the
/// unpolled future, and the step never runs. Wrap such callbacks in
/// [`deferred`](super::deferred) so the combinator awaits them.
/// [`bind_async`](OutcomeFutureExt::bind_async) rejects the unwrapped form at
/// compile time, since a future is not an `Outcome`.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::prelude_async::*;
///
/// async fn fetch() -> Outcome<&'static str, String> {
///     Outcome::success("a")
/// }
///
/// async fn check(input: &'static str) -> Outcome<usize, String> {
///     Outcome::success(input.len())
/// }
///
/// async fn run() -> String {
///     fetch()
///         .bind_async(deferred(check))
///         .map_async(|len: usize| len * 10)
///         .fold_async(|n: usize| format!("ok:{}", n), |e: String| format!("err:{}", e))
///         .await
/// }
/// ```
pub trait OutcomeFutureExt<T, E>: IntoFuture<Output = Outcome<T, E>> + Sized {
    /// Transforms the success value once the receiver resolves.
    ///
    /// On a failure the producer is never started and the same error is
    /// carried over.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let doubled = Outcome::<i32, &str>::success(5).map_async(|x: i32| x * 2).await;
    ///     assert_eq!(doubled, Outcome::Success(10));
    ///
    ///     let added = Outcome::<i32, &str>::success(3)
    ///         .map_async(deferred(|x: i32| async move { x + 7 }))
    ///         .await;
    ///     assert_eq!(added, Outcome::Success(10));
    /// }
    /// ```
    fn map_async<P>(self, f: P) -> impl Future<Output = Outcome<P::Output, E>>
    where
        P: Producer<T>;

    /// Chains a step that may fail once the receiver resolves.
    ///
    /// The producer's outcome becomes the result; on a failure receiver the
    /// producer is never started.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let bound = async { Outcome::<i32, String>::success(4) }
    ///         .bind_async(|x: i32| Outcome::success(format!("Value:{}", x)))
    ///         .await;
    ///     assert_eq!(bound, Outcome::Success("Value:4".to_string()));
    /// }
    /// ```
    fn bind_async<U, P>(self, f: P) -> impl Future<Output = Outcome<U, E>>
    where
        P: Producer<T, Output = Outcome<U, E>>;

    /// Transforms the error value once the receiver resolves.
    ///
    /// On a success the producer is never started and the value is carried
    /// over.
    fn map_error_async<P>(self, f: P) -> impl Future<Output = Outcome<T, P::Output>>
    where
        P: Producer<E>;

    /// Folds the resolved outcome into a single value.
    ///
    /// Exactly one of the two producers runs. Either may be synchronous or
    /// suspending, independently of the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let output = Outcome::<i32, &str>::failure("Oops")
    ///         .fold_async(
    ///             |value: i32| format!("Value:{}", value),
    ///             deferred(|error: &str| async move { format!("Error:{}", error) }),
    ///         )
    ///         .await;
    ///     assert_eq!(output, "Error:Oops");
    /// }
    /// ```
    fn fold_async<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: Producer<T, Output = R>,
        F: Producer<E, Output = R>;
}

impl<Fut, T, E> OutcomeFutureExt<T, E> for Fut
where
    Fut: IntoFuture<Output = Outcome<T, E>>,
{
    fn map_async<P>(self, f: P) -> impl Future<Output = Outcome<P::Output, E>>
    where
        P: Producer<T>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => Outcome::Success(f.produce(value).await),
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        }
    }

    fn bind_async<U, P>(self, f: P) -> impl Future<Output = Outcome<U, E>>
    where
        P: Producer<T, Output = Outcome<U, E>>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => f.produce(value).await,
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        }
    }

    fn map_error_async<P>(self, f: P) -> impl Future<Output = Outcome<T, P::Output>>
    where
        P: Producer<E>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(error) => Outcome::Failure(f.produce(error).await),
            }
        }
    }

    fn fold_async<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: Producer<T, Output = R>,
        F: Producer<E, Output = R>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => on_success.produce(value).await,
                Outcome::Failure(error) => on_failure.produce(error).await,
            }
        }
    }
}
