//! Extension traits for bringing foreign types into an [`Outcome`](crate::Outcome).
//!
//! - [`IntoOutcome`]: `.into_outcome()` on `Result` (and on `Outcome` itself)
//! - [`OptionOutcomeExt`]: `.ok_or_failure()` on `Option`

pub mod into_outcome;

pub use into_outcome::{IntoOutcome, OptionOutcomeExt};
