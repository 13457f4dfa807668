//! Conversion helpers between `Outcome`, `Result`, and `Option`.
//!
//! These adapters make it straightforward to adopt `outcome-rail` at the
//! edges of existing code: wrap a legacy `Result` on the way in, and hand a
//! plain `Result` back to APIs that expect one.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let outcome = result_to_outcome(Ok::<i32, &str>(42));
//! assert!(outcome.is_success());
//!
//! let result: Result<i32, &str> = outcome_to_result(Outcome::failure("failed"));
//! assert_eq!(result, Err("failed"));
//! ```

use crate::types::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Converts a `Result` to an `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(result_to_outcome(Err::<i32, _>("bad")), Outcome::Failure("bad"));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    result.into()
}

/// Converts an `Outcome` to a `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(7)), Ok(7));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts an `Option` to an `Outcome`, using `error` when the option is empty.
///
/// # Arguments
///
/// * `option` - The option to convert
/// * `error` - The failure to report for `None`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(option_to_outcome(Some(1), "missing"), Outcome::Success(1));
/// assert_eq!(option_to_outcome(None::<i32>, "missing"), Outcome::Failure("missing"));
/// ```
#[inline]
pub fn option_to_outcome<T, E>(option: Option<T>, error: E) -> Outcome<T, E> {
    match option {
        Some(value) => Outcome::Success(value),
        None => Outcome::Failure(error),
    }
}

/// Removes one level of nesting from an outcome of an outcome.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::flatten;
/// use outcome_rail::Outcome;
///
/// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::failure("inner"));
/// assert_eq!(flatten(nested), Outcome::Failure("inner"));
/// ```
#[inline]
pub fn flatten<T, E>(outcome: Outcome<Outcome<T, E>, E>) -> Outcome<T, E> {
    outcome.bind(core::convert::identity)
}
