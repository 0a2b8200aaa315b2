#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Visual state markers the binder toggles on an input.
///
/// `Error` and `Valid` are mutually exclusive settled markers;
/// `Validating` is transient while a check is in flight. Hosts typically
/// map these to the `input-error` / `input-valid` / `input-validating`
/// CSS classes of the markup this crate was built against.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum StateClass {
    Error,
    Valid,
    Validating,
}

/// Host-side handle to one form input and its error display.
///
/// The binder is the only writer for a given handle: no two bindings ever
/// target the same input, so implementations need no locking of their own.
///
/// The error text conventionally lives in a sibling element adjacent to the
/// input; locating it (the structural query against the markup) is the
/// host's business. The binder only writes plain text into it and toggles
/// the [`StateClass`] markers on the input itself — preserve that sequence
/// for drop-in visual parity.
pub trait InputHandle: Send + Sync {
    /// Returns the input's current value.
    fn value(&self) -> String;

    /// Turns a visual marker on or off.
    fn set_class(&self, class: StateClass, enabled: bool);

    /// Writes plain text into the adjacent error element. An empty string
    /// clears it.
    fn set_error_text(&self, text: &str);
}
