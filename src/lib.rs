//! Composable, async, short-circuiting field validation for form inputs.
//!
//! `form-rail` builds field validation out of small layers, leaf-first:
//!
//! - [`Verdict`] — an immutable pass/fail outcome with an optional message.
//! - [`rules`] — single predicates over a value (length bounds, regex
//!   patterns, async custom predicates with error recovery), each producing
//!   a [`Verdict`].
//! - [`Validator`] — an ordered chain of rules, evaluated strictly in
//!   insertion order with short-circuit on the first failure.
//! - [`binder`] — the orchestration layer: binds validators to inputs,
//!   drives the idle → validating → valid/error state machine, memoizes
//!   already-valid fields, and writes visual state back through the host's
//!   [`InputHandle`](binder::InputHandle).
//!
//! Failures are data, never panics: a broken custom predicate degrades to
//! "field marked invalid" rather than aborting the chain. Diagnostics go
//! through [`tracing`], so the host picks the sink.
//!
//! # Examples
//!
//! ## Composing a validator
//!
//! ```
//! use form_rail::rules::{custom, min_length};
//! use form_rail::{Validator, Verdict};
//! use std::convert::Infallible;
//!
//! async fn check_username(value: &str) -> Verdict {
//!     Validator::new()
//!         .add_rule(min_length(3))
//!         .add_rule(custom(
//!             |v: String| async move { Ok::<_, Infallible>(v != "admin") },
//!             "that name is reserved",
//!         ))
//!         .validate(value)
//!         .await
//! }
//! ```
//!
//! ## Preset pipelines
//!
//! ```
//! use form_rail::validator::presets;
//!
//! async fn demo() {
//!     assert!(presets::password().validate("Passw0rd").await.is_pass());
//!     assert!(presets::password().validate("password").await.is_fail());
//! }
//! ```
//!
//! ## Binding to inputs
//!
//! See the [`binder`] module for the full lifecycle example.

/// Field binding, state machine, and UI handle contract
pub mod binder;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Single-predicate validation rules
pub mod rules;
/// Ordered, short-circuiting rule chains and preset pipelines
pub mod validator;
/// Pass/fail outcome value type
pub mod verdict;

pub use binder::{FieldBinder, FieldState, InputHandle, StateClass};
pub use rules::Rule;
pub use validator::Validator;
pub use verdict::Verdict;
