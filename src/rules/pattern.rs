//! Regex-match rule.

use async_trait::async_trait;
use regex::Regex;

use super::Rule;
use crate::verdict::Verdict;

/// Rule requiring the value to match a regex. Created by [`pattern`].
///
/// Match semantics are the [`regex`] crate's `is_match`; anchoring is the
/// caller's business (use `^...$` to require a full match).
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
    message: String,
}

/// Creates a rule that passes iff `regex` matches the value, failing with
/// the caller-supplied `message` otherwise.
///
/// # Examples
///
/// ```
/// use form_rail::rules::{pattern, Rule};
/// use regex::Regex;
///
/// async fn demo() {
///     let hex = pattern(
///         Regex::new(r"^[0-9a-f]+$").unwrap(),
///         "must be lowercase hex",
///     );
///     assert!(hex.evaluate("c0ffee").await.is_pass());
///     assert!(hex.evaluate("C0FFEE").await.is_fail());
/// }
/// ```
pub fn pattern(regex: Regex, message: impl Into<String>) -> Pattern {
    Pattern { regex, message: message.into() }
}

#[async_trait]
impl Rule for Pattern {
    async fn evaluate(&self, value: &str) -> Verdict {
        if self.regex.is_match(value) {
            Verdict::pass()
        } else {
            Verdict::fail(self.message.clone())
        }
    }
}
