//! Extension traits for turning `Result` and `Option` into an [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, OptionOutcomeExt};
//! use outcome_rail::Outcome;
//!
//! let parsed = "42".parse::<i32>().into_outcome().map(|n| n + 1);
//! assert_eq!(parsed, Outcome::Success(43));
//!
//! let missing = None::<i32>.ok_or_failure("not found");
//! assert_eq!(missing, Outcome::Failure("not found"));
//! ```

use crate::types::Outcome;

/// Converts a value carrying a success or an error into an [`Outcome`].
pub trait IntoOutcome<T, E> {
    /// Performs the conversion.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

/// Extension trait for lifting an `Option` into an [`Outcome`].
pub trait OptionOutcomeExt<T> {
    /// Returns a success for `Some`, or a failure carrying `error` for `None`.
    fn ok_or_failure<E>(self, error: E) -> Outcome<T, E>;

    /// Like [`ok_or_failure`](OptionOutcomeExt::ok_or_failure), but builds the
    /// error lazily. The closure only runs for `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::OptionOutcomeExt;
    ///
    /// let user_id = 7;
    /// let outcome = None::<&str>.ok_or_else_failure(|| format!("user {} not found", user_id));
    /// assert_eq!(outcome.error(), "user 7 not found");
    /// ```
    fn ok_or_else_failure<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E;
}

impl<T> OptionOutcomeExt<T> for Option<T> {
    #[inline]
    fn ok_or_failure<E>(self, error: E) -> Outcome<T, E> {
        crate::convert::option_to_outcome(self, error)
    }

    #[inline]
    fn ok_or_else_failure<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(f()),
        }
    }
}
