//! Validation rules: single predicates over an input value.
//!
//! A [`Rule`] is one atomic check producing a [`Verdict`]. Rules carry no
//! identity beyond their behavior; they are stateless apart from their own
//! closed-over parameters (a length bound, a compiled pattern, a custom
//! predicate) and are freely composable into a
//! [`Validator`](crate::validator::Validator).
//!
//! Four rule kinds ship with the crate, each with a factory function:
//!
//! - [`min_length`] / [`max_length`] — length bounds
//! - [`pattern`] — regex match, semantics delegated to the [`regex`] crate
//! - [`custom`] — externally supplied async predicate with error recovery
//!
//! Library consumers can add their own rule kinds by implementing [`Rule`]
//! directly.
//!
//! # Examples
//!
//! ```
//! use form_rail::rules::{min_length, Rule};
//!
//! async fn check(value: &str) -> bool {
//!     min_length(3).evaluate(value).await.is_pass()
//! }
//! ```

mod custom;
mod length;
mod pattern;

pub use custom::{custom, Custom, IntoVerdict};
pub use length::{max_length, min_length, MaxLength, MinLength};
pub use pattern::{pattern, Pattern};

use async_trait::async_trait;

use crate::verdict::Verdict;

/// A single atomic check over an input value.
///
/// Evaluation is async because a check may itself await external work (an
/// async custom predicate doing an availability lookup, say). The built-in
/// length and pattern rules complete without suspending.
///
/// Implementations must not panic on any input: expected failures are
/// returned as a failing [`Verdict`].
#[async_trait]
pub trait Rule: Send + Sync {
    /// Evaluates the rule against `value`.
    async fn evaluate(&self, value: &str) -> Verdict;
}
