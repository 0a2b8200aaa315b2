//! Fixed validation pipelines for common account fields.
//!
//! Each preset is an immutable template: calling it builds a fresh
//! [`Validator`] with a fixed rule order. The compiled regexes are shared
//! process-wide.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use super::Validator;
use crate::rules::{max_length, min_length, pattern, Rule};
use crate::verdict::Verdict;

static USERNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("USERNAME_PATTERN is a valid regex pattern")
});

/// Username pipeline: min_length(3), max_length(20), then letters, digits,
/// underscores and hyphens only.
///
/// # Examples
///
/// ```
/// use form_rail::validator::presets;
///
/// async fn demo() {
///     assert!(presets::username().validate("ab_12").await.is_pass());
///     assert!(presets::username().validate("abc def").await.is_fail());
/// }
/// ```
pub fn username() -> Validator {
    Validator::new()
        .add_rule(min_length(3))
        .add_rule(max_length(20))
        .add_rule(pattern(
            USERNAME_PATTERN.clone(),
            "may only contain letters, numbers, underscores and hyphens",
        ))
}

/// Display-name pipeline: min_length(1), max_length(20).
pub fn display_name() -> Validator {
    Validator::new().add_rule(min_length(1)).add_rule(max_length(20))
}

/// Requires at least one lowercase letter, one uppercase letter and one
/// digit. A dedicated rule rather than a lookahead regex: the `regex` crate
/// has no lookaheads.
struct CharacterMix;

#[async_trait]
impl Rule for CharacterMix {
    async fn evaluate(&self, value: &str) -> Verdict {
        let lower = value.chars().any(|c| c.is_ascii_lowercase());
        let upper = value.chars().any(|c| c.is_ascii_uppercase());
        let digit = value.chars().any(|c| c.is_ascii_digit());
        if lower && upper && digit {
            Verdict::pass()
        } else {
            Verdict::fail("must contain lowercase and uppercase letters and a digit")
        }
    }
}

/// Password pipeline: min_length(6), max_length(20), then the
/// lower/upper/digit mix requirement.
///
/// The length bounds run first, so `"PASS1"` reports the minimum-length
/// failure rather than the missing lowercase letter.
pub fn password() -> Validator {
    Validator::new()
        .add_rule(min_length(6))
        .add_rule(max_length(20))
        .add_rule(CharacterMix)
}
