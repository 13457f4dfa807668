/// Unwraps a success, or returns the failure from the enclosing function.
///
/// This is the [`Outcome`](crate::Outcome) analogue of the `?` operator. The
/// error is converted with [`From`], so a step with a narrower error type can
/// be used inside a function returning a wider one.
///
/// # Examples
///
/// ```
/// use outcome_rail::{try_outcome, Outcome};
///
/// fn half(x: i32) -> Outcome<i32, String> {
///     if x % 2 == 0 {
///         Outcome::success(x / 2)
///     } else {
///         Outcome::failure(format!("{} is odd", x))
///     }
/// }
///
/// fn quarter(x: i32) -> Outcome<i32, String> {
///     let once = try_outcome!(half(x));
///     half(once)
/// }
///
/// assert_eq!(quarter(8), Outcome::Success(2));
/// assert_eq!(quarter(6), Outcome::Failure("3 is odd".to_string()));
/// ```
#[macro_export]
macro_rules! try_outcome {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => {
                return $crate::Outcome::Failure(::core::convert::From::from(error));
            },
        }
    };
}

/// Returns a failure from the enclosing function unless the condition holds.
///
/// The error expression is only evaluated when the condition is false.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ensure_outcome, Outcome};
///
/// fn positive(x: i32) -> Outcome<i32, &'static str> {
///     ensure_outcome!(x > 0, "must be positive");
///     Outcome::success(x)
/// }
///
/// assert!(positive(1).is_success());
/// assert_eq!(positive(-1), Outcome::Failure("must be positive"));
/// ```
#[macro_export]
macro_rules! ensure_outcome {
    ($cond:expr, $error:expr $(,)?) => {
        if !$cond {
            return $crate::Outcome::Failure(::core::convert::From::from($error));
        }
    };
}
