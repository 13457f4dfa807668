//! The outcome type and its contract-violation fault.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, WrongVariantAccess};
//!
//! let outcome = Outcome::<i32, &str>::success(3)
//!     .bind(|x| Outcome::success(format!("Value is {}", x)));
//!
//! assert_eq!(outcome.value(), "Value is 3");
//! assert_eq!(outcome.try_error(), Err(WrongVariantAccess::ErrorOnSuccess));
//! ```

pub mod iter;
pub mod outcome;
pub mod wrong_variant_access;

pub use outcome::Outcome;
pub use wrong_variant_access::WrongVariantAccess;
