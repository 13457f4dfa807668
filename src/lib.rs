//! A success-or-failure type for railway-style pipelines, with combinators
//! that work the same whether the outcome and its callbacks are immediate or
//! awaited.
//!
//! Business failures are plain data in [`Outcome::Failure`]; reading the
//! payload of the wrong variant is a contract violation reported as
//! [`WrongVariantAccess`]. Each submodule re-exports its public surface from
//! here, so consumers can depend on `outcome_rail::*` or pick focused pieces.
//!
//! # Examples
//!
//! ## Sync Pipeline
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|_| format!("not a number: {}", input)).into()
//! }
//!
//! let message = parse("21")
//!     .map(|n| n * 2)
//!     .bind(|n| if n > 0 { Outcome::success(n) } else { Outcome::failure("negative".to_string()) })
//!     .fold(|n| format!("got {}", n), |e| format!("error: {}", e));
//!
//! assert_eq!(message, "got 42");
//! ```
//!
//! ## Contract Violations
//!
//! ```
//! use outcome_rail::{Outcome, WrongVariantAccess};
//!
//! let outcome = Outcome::<i32, &str>::success(1);
//! assert_eq!(outcome.try_error(), Err(WrongVariantAccess::ErrorOnSuccess));
//! ```
//!
//! ## Async Pipeline
//!
//! With the `async` feature, the same combinators are available over futures
//! of outcomes and over suspending callbacks; see `async_ext`.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome, Result, and Option
pub mod convert;
/// Early-return macros for Outcome-returning functions
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for bringing foreign types into an Outcome
pub mod traits;
/// The Outcome type and its contract-violation fault
pub mod types;

/// Async combinators over immediate and deferred outcomes (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use convert::*;
pub use traits::*;
pub use types::{Outcome, WrongVariantAccess};
