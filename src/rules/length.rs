//! Length-bound rules.
//!
//! Lengths are counted in Unicode scalar values (`chars().count()`), not
//! bytes, so multi-byte input is bounded by what the user perceives as
//! character count.

use async_trait::async_trait;

use super::Rule;
use crate::verdict::Verdict;

/// Rule requiring a minimum length. Created by [`min_length`].
#[derive(Clone, Copy, Debug)]
pub struct MinLength {
    min: usize,
}

/// Rule requiring a maximum length. Created by [`max_length`].
#[derive(Clone, Copy, Debug)]
pub struct MaxLength {
    max: usize,
}

/// Creates a rule that passes iff the value has at least `min` characters.
///
/// # Examples
///
/// ```
/// use form_rail::rules::{min_length, Rule};
///
/// async fn demo() {
///     assert!(min_length(3).evaluate("abc").await.is_pass());
///     assert!(min_length(3).evaluate("ab").await.is_fail());
/// }
/// ```
pub fn min_length(min: usize) -> MinLength {
    MinLength { min }
}

/// Creates a rule that passes iff the value has at most `max` characters.
///
/// # Examples
///
/// ```
/// use form_rail::rules::{max_length, Rule};
///
/// async fn demo() {
///     assert!(max_length(5).evaluate("abcde").await.is_pass());
///     assert!(max_length(5).evaluate("abcdef").await.is_fail());
/// }
/// ```
pub fn max_length(max: usize) -> MaxLength {
    MaxLength { max }
}

#[async_trait]
impl Rule for MinLength {
    async fn evaluate(&self, value: &str) -> Verdict {
        if value.chars().count() >= self.min {
            Verdict::pass()
        } else {
            Verdict::fail(format!("must be at least {} characters", self.min))
        }
    }
}

#[async_trait]
impl Rule for MaxLength {
    async fn evaluate(&self, value: &str) -> Verdict {
        if value.chars().count() <= self.max {
            Verdict::pass()
        } else {
            Verdict::fail(format!("must be at most {} characters", self.max))
        }
    }
}
