//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus the async combinators.
//!
//! # Usage
//!
//! ```
//! use outcome_rail::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> Outcome<String, String> {
//!     Outcome::success(format!("user-{}", id))
//! }
//!
//! async fn greet(id: u64) -> String {
//!     fetch_user(id)
//!         .map_async(|name: String| format!("hello {}", name))
//!         .fold_async(|greeting: String| greeting, |error: String| error)
//!         .await
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`try_outcome!`], [`ensure_outcome!`]
//! - **Types**: [`Outcome`], [`WrongVariantAccess`]
//! - **Traits**: [`IntoOutcome`], [`OptionOutcomeExt`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`OutcomeFutureExt`](crate::async_ext::OutcomeFutureExt),
//!   [`Producer`](crate::async_ext::Producer)
//! - **Functions**: [`deferred`](crate::async_ext::deferred)
//! - **Tracing** (with the `tracing` feature): [`OutcomeTraceExt`](crate::async_ext::OutcomeTraceExt),
//!   [`FutureOutcomeTraceExt`](crate::async_ext::FutureOutcomeTraceExt)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{deferred, Deferred, OutcomeFutureExt, Producer};

#[cfg(feature = "tracing")]
pub use crate::async_ext::{FutureOutcomeTraceExt, OutcomeTraceExt};
