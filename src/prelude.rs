//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use form_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Verdict`], [`Validator`], [`FieldBinder`], [`FieldState`],
//!   [`StateClass`]
//! - **Traits**: [`Rule`], [`IntoVerdict`], [`InputHandle`]
//! - **Rule factories**: [`min_length`], [`max_length`], [`pattern`],
//!   [`custom`]
//! - **Preset pipelines**: the [`presets`] module
//!
//! # Examples
//!
//! ```
//! use form_rail::prelude::*;
//!
//! async fn check(value: &str) -> Verdict {
//!     Validator::new()
//!         .add_rule(min_length(3))
//!         .add_rule(max_length(20))
//!         .validate(value)
//!         .await
//! }
//! ```

pub use crate::binder::{FieldBinder, FieldState, InputHandle, StateClass};
pub use crate::rules::{custom, max_length, min_length, pattern, IntoVerdict, Rule};
pub use crate::validator::{presets, Validator};
pub use crate::verdict::Verdict;
