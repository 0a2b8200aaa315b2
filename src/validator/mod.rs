//! Ordered, short-circuiting rule chains.
//!
//! A [`Validator`] applies its rules strictly in insertion order and stops
//! at the first failure. Rule order is part of each concrete validator's
//! contract, not incidental: a later rule may rely on preconditions an
//! earlier rule already guaranteed (a length bound before a pattern check
//! keeps pathological regex cost off huge input), and rules after a failure
//! are never invoked, so they must have no required side effects.
//!
//! Ready-made pipelines for common fields live in [`presets`].
//!
//! # Examples
//!
//! ```
//! use form_rail::rules::{max_length, min_length};
//! use form_rail::{Validator, Verdict};
//!
//! async fn check(value: &str) -> Verdict {
//!     Validator::new()
//!         .add_rule(min_length(1))
//!         .add_rule(max_length(64))
//!         .validate(value)
//!         .await
//! }
//! ```

pub mod presets;

use core::fmt;

use smallvec::SmallVec;

use crate::rules::Rule;
use crate::verdict::Verdict;

/// Inline capacity covers every shipped preset (three rules or fewer).
type RuleList = SmallVec<[Box<dyn Rule>; 4]>;

/// An ordered, short-circuiting chain of [`Rule`]s applied to one value.
///
/// The validator owns its rule list; rules themselves stay stateless and
/// interchangeable.
#[derive(Default)]
pub struct Validator {
    rules: RuleList,
}

impl Validator {
    /// Creates an empty validator.
    ///
    /// An empty validator passes every value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule to the chain, preserving insertion order.
    ///
    /// Builder-style: consumes and returns `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::rules::min_length;
    /// use form_rail::Validator;
    ///
    /// let validator = Validator::new().add_rule(min_length(3));
    /// assert_eq!(validator.len(), 1);
    /// ```
    #[must_use]
    pub fn add_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Evaluates the rules strictly in insertion order.
    ///
    /// Returns the first failing rule's verdict immediately; rules after it
    /// are not evaluated. Returns [`Verdict::pass`] when every rule passes
    /// (vacuously for an empty chain).
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::rules::{min_length, max_length};
    /// use form_rail::Validator;
    ///
    /// async fn demo() {
    ///     let validator = Validator::new()
    ///         .add_rule(min_length(3))
    ///         .add_rule(max_length(5));
    ///     assert!(validator.validate("abcd").await.is_pass());
    ///     assert!(validator.validate("ab").await.is_fail());
    /// }
    /// ```
    pub async fn validate(&self, value: &str) -> Verdict {
        for rule in &self.rules {
            let verdict = rule.evaluate(value).await;
            if verdict.is_fail() {
                return verdict;
            }
        }
        Verdict::pass()
    }

    /// Returns the number of rules in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the chain holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").field("rules", &self.rules.len()).finish()
    }
}
