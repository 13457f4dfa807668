//! Async extensions for outcome-rail.
//!
//! This module provides the async counterparts of the [`Outcome`](crate::Outcome)
//! combinators, with the same short-circuit behaviour as the sync ones.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome_rail::prelude_async::*;
//!
//! async fn lookup(id: u32) -> Outcome<u32, String> {
//!     if id == 0 {
//!         Outcome::failure("unknown id".to_string())
//!     } else {
//!         Outcome::success(id * 100)
//!     }
//! }
//!
//! async fn handle(id: u32) -> (u16, String) {
//!     Outcome::<u32, String>::success(id)
//!         .bind_async(deferred(lookup))
//!         .map_async(|balance: u32| balance + 1)
//!         .fold_async(
//!             |balance: u32| (200, balance.to_string()),
//!             |error: String| (400, error),
//!         )
//!         .await
//! }
//! ```

mod outcome_future_ext;
mod producer;
#[cfg(feature = "tracing")]
mod tracing_ext;

pub use outcome_future_ext::OutcomeFutureExt;
pub use producer::{deferred, Deferred, Producer};
#[cfg(feature = "tracing")]
pub use tracing_ext::{FutureOutcomeTraceExt, OutcomeTraceExt, TracedOutcome};
