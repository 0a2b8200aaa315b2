//! Caller-supplied async predicate rule.

use core::fmt::Display;
use core::future::Future;

use async_trait::async_trait;

use super::Rule;
use crate::verdict::Verdict;

/// Conversion from a custom predicate's output into a [`Verdict`].
///
/// Implemented for `bool` (mapped through the rule's fallback message) and
/// for [`Verdict`] itself (passed through unchanged, letting a predicate
/// supply its own dynamic message).
pub trait IntoVerdict {
    /// Converts the predicate output, using `fallback` as the failure
    /// message where the output carries none of its own.
    fn into_verdict(self, fallback: &str) -> Verdict;
}

impl IntoVerdict for bool {
    #[inline]
    fn into_verdict(self, fallback: &str) -> Verdict {
        if self {
            Verdict::pass()
        } else {
            Verdict::fail(fallback)
        }
    }
}

impl IntoVerdict for Verdict {
    #[inline]
    fn into_verdict(self, _fallback: &str) -> Verdict {
        self
    }
}

/// Rule wrapping an externally supplied async predicate. Created by
/// [`custom`].
#[derive(Clone, Debug)]
pub struct Custom<F> {
    predicate: F,
    fallback: String,
}

/// Creates a rule around an async predicate.
///
/// The predicate receives the input value and returns
/// `Result<impl IntoVerdict, impl Display>`:
///
/// - `Ok(true)` / `Ok(false)` map to pass / fail-with-`fallback`.
/// - `Ok(Verdict)` is passed through unchanged, so a predicate can report a
///   dynamic message.
/// - `Err(e)` is **never propagated**: it becomes `Verdict::fail` with the
///   error's `Display` text, or with `fallback` when that text is empty.
///   A misbehaving predicate therefore degrades to "field marked invalid"
///   instead of aborting the whole validation chain.
///
/// Panics inside the predicate are not caught; report expected failures
/// through the `Result` channel.
///
/// # Examples
///
/// ```
/// use form_rail::rules::{custom, Rule};
/// use std::convert::Infallible;
///
/// async fn demo() {
///     let no_admin = custom(
///         |value: String| async move { Ok::<_, Infallible>(value != "admin") },
///         "that name is reserved",
///     );
///     assert!(no_admin.evaluate("alice").await.is_pass());
///     assert_eq!(
///         no_admin.evaluate("admin").await.message(),
///         Some("that name is reserved"),
///     );
/// }
/// ```
pub fn custom<F, Fut, O, E>(predicate: F, fallback: impl Into<String>) -> Custom<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<O, E>> + Send,
    O: IntoVerdict + Send,
    E: Display + Send,
{
    Custom { predicate, fallback: fallback.into() }
}

#[async_trait]
impl<F, Fut, O, E> Rule for Custom<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<O, E>> + Send,
    O: IntoVerdict + Send,
    E: Display + Send,
{
    async fn evaluate(&self, value: &str) -> Verdict {
        match (self.predicate)(value.to_owned()).await {
            Ok(outcome) => outcome.into_verdict(&self.fallback),
            Err(error) => {
                let message = error.to_string();
                tracing::error!(error = %message, "custom predicate failed");
                if message.is_empty() {
                    Verdict::fail(self.fallback.as_str())
                } else {
                    Verdict::fail(message)
                }
            },
        }
    }
}
