use core::fmt::{self, Display};

/// Contract violation raised when the payload of the wrong variant is read.
///
/// Reading the success value of a failure, or the error of a success, is a
/// programmer error and never a business failure. The panicking accessors on
/// [`Outcome`](crate::Outcome) abort the calling path with this fault's message,
/// while the checked accessors return it so callers can match on the kind
/// instead of on message text.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, WrongVariantAccess};
///
/// let outcome = Outcome::<i32, &str>::failure("boom");
/// assert_eq!(outcome.try_value(), Err(WrongVariantAccess::ValueOnFailure));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WrongVariantAccess {
    /// The success value was requested from a failure.
    ValueOnFailure,
    /// The error was requested from a success.
    ErrorOnSuccess,
}

impl WrongVariantAccess {
    /// Returns the fixed description of this fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::WrongVariantAccess;
    ///
    /// assert_eq!(
    ///     WrongVariantAccess::ErrorOnSuccess.message(),
    ///     "accessed error on a success result"
    /// );
    /// ```
    #[must_use]
    #[inline]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ValueOnFailure => "accessed value on a failure result",
            Self::ErrorOnSuccess => "accessed error on a success result",
        }
    }
}

impl Display for WrongVariantAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for WrongVariantAccess {}

/// Panics with the given fault. Kept out of line so the accessors stay small.
///
/// With `std` the payload is the fault itself, so a `catch_unwind` caller can
/// downcast it to [`WrongVariantAccess`]. Without `std` only the message is
/// available.
#[cfg(feature = "std")]
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn wrong_variant(fault: WrongVariantAccess) -> ! {
    std::panic::panic_any(fault)
}

#[cfg(not(feature = "std"))]
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn wrong_variant(fault: WrongVariantAccess) -> ! {
    panic!("{}", fault)
}
