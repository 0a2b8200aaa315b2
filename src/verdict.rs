#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pass/fail outcome of a single validation check.
///
/// `Verdict` is the value every [`Rule`](crate::rules::Rule) and
/// [`Validator`](crate::validator::Validator) produces: either the input
/// passed, or it failed with a human-readable message. Failures are data,
/// never panics, so a failing check can flow through a rule chain and into
/// UI state without unwinding anything.
///
/// A message exists only on the failing variant, so "no message iff valid"
/// holds by construction. By convention failure messages are non-empty.
///
/// # Serde Support
///
/// `Verdict` implements `Serialize` and `Deserialize` when the `serde`
/// feature is enabled.
///
/// # Examples
///
/// ```
/// use form_rail::Verdict;
///
/// let ok = Verdict::pass();
/// assert!(ok.is_pass());
/// assert_eq!(ok.message(), None);
///
/// let bad = Verdict::fail("must be at least 3 characters");
/// assert!(bad.is_fail());
/// assert_eq!(bad.message(), Some("must be at least 3 characters"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Verdict {
    Pass,
    Fail(String),
}

impl Verdict {
    /// Creates a passing verdict.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::Verdict;
    ///
    /// assert!(Verdict::pass().is_pass());
    /// ```
    #[must_use]
    #[inline]
    pub fn pass() -> Self {
        Self::Pass
    }

    /// Creates a failing verdict carrying `message`.
    ///
    /// # Arguments
    ///
    /// * `message` - The error message shown to the user; non-empty by
    ///   convention
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::Verdict;
    ///
    /// let verdict = Verdict::fail("too short");
    /// assert_eq!(verdict.message(), Some("too short"));
    /// ```
    #[must_use]
    #[inline]
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail(message.into())
    }

    /// Returns `true` if the check passed.
    #[must_use]
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns `true` if the check failed.
    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    /// Returns the failure message, or `None` for a passing verdict.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::Verdict;
    ///
    /// assert_eq!(Verdict::pass().message(), None);
    /// assert_eq!(Verdict::fail("nope").message(), Some("nope"));
    /// ```
    #[must_use]
    #[inline]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pass => None,
            Self::Fail(message) => Some(message),
        }
    }

    /// Consumes the verdict and returns the failure message, if any.
    #[must_use]
    #[inline]
    pub fn into_message(self) -> Option<String> {
        match self {
            Self::Pass => None,
            Self::Fail(message) => Some(message),
        }
    }
}
