#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Validation state of one bound field.
///
/// The only stateful entity in the core. A field starts `Idle` when bound,
/// moves to `Validating` while a check runs, and settles at `Valid` or
/// `Error`. Only rebinding the field resets a settled state back to `Idle`.
///
/// Transitions are monotonic within one check: no interleaving of two
/// checks on the same field is possible (see
/// [`FieldBinder::validate`](crate::binder::FieldBinder::validate)).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FieldState {
    /// Bound but never validated, or reset by rebinding.
    Idle,
    /// A check is in flight.
    Validating,
    /// The last check passed; future checks short-circuit.
    Valid,
    /// The last check failed with this message.
    Error(String),
}

impl FieldState {
    /// Returns `true` for [`FieldState::Valid`].
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the failure message for [`FieldState::Error`], else `None`.
    #[must_use]
    #[inline]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
