//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`try_outcome!`], [`ensure_outcome!`]
//! - **Types**: [`Outcome`], [`WrongVariantAccess`]
//! - **Traits**: [`IntoOutcome`], [`OptionOutcomeExt`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn load_config(raw: Option<&str>) -> Outcome<u16, String> {
//!     let port = try_outcome!(raw.ok_or_failure("missing port".to_string()));
//!     port.parse::<u16>().map_err(|e| e.to_string()).into_outcome()
//! }
//!
//! assert_eq!(load_config(Some("8080")), Outcome::Success(8080));
//! assert!(load_config(None).is_failure());
//! ```

// Macros
pub use crate::{ensure_outcome, try_outcome};

// Core types
pub use crate::types::{Outcome, WrongVariantAccess};

// Traits
pub use crate::traits::{IntoOutcome, OptionOutcomeExt};
