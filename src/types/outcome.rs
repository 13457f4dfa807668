#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::wrong_variant_access::{wrong_variant, WrongVariantAccess};

/// A resolved success-or-failure value.
///
/// `Outcome<T, E>` carries exactly one payload: a success value of type `T`
/// or an error value of type `E`. The variant alone decides which one is
/// present; payloads are never inspected, so `Success(None)` is still a
/// success and `Failure(None)` is still a failure.
///
/// Business failures travel through the `Failure` variant and are threaded
/// by the combinators ([`map`](Outcome::map), [`bind`](Outcome::bind),
/// [`map_error`](Outcome::map_error)) until [`fold`](Outcome::fold) turns the
/// outcome into an ordinary value. Reading the payload of the wrong variant
/// is a contract violation reported as [`WrongVariantAccess`].
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when the `serde`
/// feature is enabled and `T` and `E` do.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let doubled = Outcome::<i32, &str>::success(5).map(|x| x * 2);
/// assert_eq!(doubled, Outcome::Success(10));
///
/// let failed = Outcome::<i32, &str>::failure("fail").map(|x| x * 10);
/// assert_eq!(failed, Outcome::Failure("fail"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    ///
    /// The value is not inspected; any value, including an empty sentinel,
    /// produces a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<Option<&str>, &str>::success(None);
    /// assert!(outcome.is_success());
    /// assert_eq!(outcome.value(), &None);
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, Option<&str>>::failure(None);
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if this is a success.
    #[must_use]
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a failure.
    #[must_use]
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`WrongVariantAccess::ValueOnFailure`] when called on a
    /// failure. With the `std` feature the fault itself is the panic payload.
    /// Use [`try_value`](Outcome::try_value) to check instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, &str>::success("Operation successful");
    /// assert_eq!(*outcome.value(), "Operation successful");
    /// ```
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, &str>::failure("fail");
    /// let _ = outcome.value(); // accessed value on a failure result
    /// ```
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => wrong_variant(WrongVariantAccess::ValueOnFailure),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with [`WrongVariantAccess::ErrorOnSuccess`] when called on a
    /// success. Use [`try_error`](Outcome::try_error) to check instead.
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &E {
        match self {
            Self::Success(_) => wrong_variant(WrongVariantAccess::ErrorOnSuccess),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success value, or the fault describing the wrong access.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, WrongVariantAccess};
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(1).try_value(), Ok(&1));
    /// assert_eq!(
    ///     Outcome::<i32, &str>::failure("no").try_value(),
    ///     Err(WrongVariantAccess::ValueOnFailure)
    /// );
    /// ```
    #[inline]
    pub fn try_value(&self) -> Result<&T, WrongVariantAccess> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(WrongVariantAccess::ValueOnFailure),
        }
    }

    /// Returns the error value, or the fault describing the wrong access.
    #[inline]
    pub fn try_error(&self) -> Result<&E, WrongVariantAccess> {
        match self {
            Self::Success(_) => Err(WrongVariantAccess::ErrorOnSuccess),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Consumes the outcome and returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`WrongVariantAccess::ValueOnFailure`] on a failure.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => wrong_variant(WrongVariantAccess::ValueOnFailure),
        }
    }

    /// Consumes the outcome and returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with [`WrongVariantAccess::ErrorOnSuccess`] on a success.
    #[inline]
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Self::Success(_) => wrong_variant(WrongVariantAccess::ErrorOnSuccess),
            Self::Failure(error) => error,
        }
    }

    /// Converts into `Some(value)` for a success and `None` for a failure.
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into `Some(error)` for a failure and `None` for a success.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows both payloads, producing an `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts into the standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Transforms the success value with a total function.
    ///
    /// On a failure `f` is not called and the same error is carried over.
    /// Use [`bind`](Outcome::bind) when the transformation can itself fail.
    ///
    /// # Arguments
    ///
    /// * `f` - A function from the success value to the new success value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::success(2).map(|x| x * 10);
    /// assert_eq!(outcome.into_value(), 20);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a step that may fail.
    ///
    /// On a success the outcome of `f` is returned as is. On a failure `f`
    /// is not called and the original error short-circuits the chain.
    ///
    /// # Arguments
    ///
    /// * `f` - The next step of the pipeline
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn parse_even(input: i32) -> Outcome<i32, &'static str> {
    ///     if input % 2 == 0 {
    ///         Outcome::success(input)
    ///     } else {
    ///         Outcome::failure("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(4).bind(parse_even), Outcome::Success(4));
    /// assert_eq!(Outcome::success(3).bind(parse_even), Outcome::Failure("not even"));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the error value, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::failure("NotFound").map_error(|e| e.len());
    /// assert_eq!(outcome, Outcome::Failure(8));
    /// ```
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Leaves the outcome by folding both variants into one value.
    ///
    /// Exactly one of the two functions is called.
    ///
    /// # Arguments
    ///
    /// * `on_success` - Called with the success value
    /// * `on_failure` - Called with the error value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let message = Outcome::<i32, &str>::failure("Oops").fold(
    ///     |value| format!("Success: {}", value),
    ///     |error| format!("Error: {}", error),
    /// );
    /// assert_eq!(message, "Error: Oops");
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}
