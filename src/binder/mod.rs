//! Field binding: connects validators to inputs and drives visual state.
//!
//! [`FieldBinder`] is the orchestration layer. It keeps an explicit side
//! table from field key to binding (validators + state), runs the bound
//! validator chain when the host reports a lifecycle event (loss of focus,
//! or an explicit [`validate`](FieldBinder::validate) call), and writes the
//! outcome back through the field's [`InputHandle`].
//!
//! # State machine
//!
//! Each field moves through [`FieldState`]:
//!
//! ```text
//! Idle ───validate()──▶ Validating ────all pass────▶ Valid
//!                        ▲       │
//!                        │       └─first failure──▶ Error(msg)
//!                        └───────────validate()──────────┘
//!
//! rebinding resets any state back to Idle
//! ```
//!
//! Once a field is `Valid`, further `validate()` calls return `true`
//! without re-running any rule; only rebinding resets it. A `validate()`
//! arriving while a check is already in flight queues after it (per-field
//! async mutex) and then takes the same fast path.
//!
//! # Examples
//!
//! ```ignore
//! let mut binder = FieldBinder::new();
//! binder.bind_username("username", username_input);
//! binder.bind_password("password", password_input);
//!
//! // on blur of the username input:
//! binder.validate(&"username").await;
//!
//! // on submit:
//! if binder.validate_all(["username", "password"].iter()).await {
//!     /* all fields valid */
//! }
//! ```

mod input;
mod state;

pub use input::{InputHandle, StateClass};
pub use state::FieldState;

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::validator::{presets, Validator};
use crate::verdict::Verdict;

/// One bound field: its handle, its validator chain, and its state.
///
/// The state sits behind an async mutex; holding the lock for the whole
/// check is what serializes concurrent `validate()` calls on one field.
struct FieldBinding<H> {
    input: H,
    validators: Vec<Validator>,
    state: Mutex<FieldState>,
}

/// Binds validators to inputs and orchestrates their validation lifecycle.
///
/// `K` identifies a field (any `Eq + Hash` key the host chooses); `H` is
/// the host's [`InputHandle`] implementation. State lives in an explicit
/// side table keyed by `K` — nothing is stashed on the input itself.
///
/// Exclusivity is structural: bind each input under exactly one key, in
/// exactly one binder.
pub struct FieldBinder<K, H> {
    fields: HashMap<K, Arc<FieldBinding<H>>>,
    timeout: Option<Duration>,
}

impl<K, H> FieldBinder<K, H>
where
    K: Eq + Hash,
    H: InputHandle,
{
    /// Creates an empty binder with no validation timeout.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: HashMap::new(), timeout: None }
    }

    /// Caps every field check at `timeout`.
    ///
    /// Without a cap, a custom predicate that never resolves leaves its
    /// field stuck at [`FieldState::Validating`] forever. With one, the
    /// check fails with a timeout message instead.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Binds `validators` to the input under `key`.
    ///
    /// Idempotent rebinding: an existing binding under the same key is
    /// replaced wholesale — the old validators and listener registration
    /// are dropped (no duplicate bindings accumulate) and the field's
    /// state silently resets to [`FieldState::Idle`], so the next
    /// [`validate`](Self::validate) re-runs the rules even if the field
    /// was already `Valid`.
    ///
    /// Binding an empty validator list is legal; such a field validates
    /// vacuously.
    pub fn bind(&mut self, key: K, input: H, validators: Vec<Validator>) {
        let binding =
            FieldBinding { input, validators, state: Mutex::new(FieldState::Idle) };
        self.fields.insert(key, Arc::new(binding));
    }

    /// Binds the [`presets::username`] pipeline to the input under `key`.
    pub fn bind_username(&mut self, key: K, input: H) {
        self.bind(key, input, vec![presets::username()]);
    }

    /// Binds the [`presets::display_name`] pipeline to the input under `key`.
    pub fn bind_display_name(&mut self, key: K, input: H) {
        self.bind(key, input, vec![presets::display_name()]);
    }

    /// Binds the [`presets::password`] pipeline to the input under `key`.
    pub fn bind_password(&mut self, key: K, input: H) {
        self.bind(key, input, vec![presets::password()]);
    }

    /// Returns `true` if a binding exists under `key`.
    #[must_use]
    pub fn is_bound(&self, key: &K) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns the field's current state, or `None` if `key` is unbound.
    ///
    /// Awaits any check in flight on the field, so the answer is always a
    /// settled (or idle) state.
    pub async fn state(&self, key: &K) -> Option<FieldState> {
        match self.fields.get(key) {
            Some(binding) => Some(binding.state.lock().await.clone()),
            None => None,
        }
    }

    /// Validates the field bound under `key`; returns `true` iff the field
    /// ends up [`FieldState::Valid`].
    ///
    /// This is the entry point the host wires to the input's blur event,
    /// and the one to call imperatively before a submit.
    ///
    /// - A field already `Valid` returns `true` immediately, without
    ///   invoking any rule (memoized fast path; see [`bind`](Self::bind)
    ///   for how to invalidate it).
    /// - A call arriving while the field is `Validating` waits for the
    ///   in-flight check, then takes the fast path if that check passed.
    /// - The bound validators run strictly in order and the chain stops at
    ///   the first failure, whose message becomes the field's error text.
    /// - An unbound `key` is an integration bug: it is reported through
    ///   `tracing` and returns `false`, never panics.
    pub async fn validate(&self, key: &K) -> bool {
        let Some(binding) = self.fields.get(key) else {
            tracing::error!("validate() called on an input with no bound validators");
            return false;
        };

        // Queued-after: an in-flight check holds the lock until it settles.
        let mut state = binding.state.lock().await;
        if state.is_valid() {
            return true;
        }

        *state = FieldState::Validating;
        let input = &binding.input;
        input.set_class(StateClass::Error, false);
        input.set_class(StateClass::Valid, false);
        input.set_class(StateClass::Validating, true);
        input.set_error_text("");

        let verdict = self.run_validators(binding).await;

        input.set_class(StateClass::Validating, false);
        match verdict {
            Verdict::Pass => {
                input.set_class(StateClass::Valid, true);
                input.set_error_text("");
                *state = FieldState::Valid;
                true
            },
            Verdict::Fail(message) => {
                input.set_class(StateClass::Error, true);
                input.set_error_text(&message);
                *state = FieldState::Error(message);
                false
            },
        }
    }

    /// Validates fields strictly in the order given, stopping at the first
    /// failure.
    ///
    /// "First invalid field" semantics for a submit-time check: returns
    /// `false` as soon as one field fails, leaving later fields untouched;
    /// errors are deliberately not aggregated across fields.
    ///
    /// An empty sequence returns `true`.
    pub async fn validate_all<'a, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        for key in keys {
            if !self.validate(key).await {
                return false;
            }
        }
        true
    }

    /// Runs the field's validator chain over the input's current value,
    /// short-circuiting at the first failing validator, under the
    /// configured timeout if any.
    async fn run_validators(&self, binding: &FieldBinding<H>) -> Verdict {
        let value = binding.input.value();
        let chain = async {
            for (index, validator) in binding.validators.iter().enumerate() {
                tracing::debug!(validator = index, "running validator");
                let verdict = validator.validate(&value).await;
                if verdict.is_fail() {
                    tracing::debug!(
                        validator = index,
                        error = verdict.message().unwrap_or_default(),
                        "validator failed"
                    );
                    return verdict;
                }
            }
            tracing::debug!("all validators passed");
            Verdict::pass()
        };

        match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, chain).await {
                Ok(verdict) => verdict,
                Err(_) => {
                    let timeout_ms = limit.as_millis() as u64;
                    tracing::error!(timeout_ms, "validation timed out");
                    Verdict::fail("validation timed out")
                },
            },
            None => chain.await,
        }
    }
}

impl<K, H> Default for FieldBinder<K, H>
where
    K: Eq + Hash,
    H: InputHandle,
{
    fn default() -> Self {
        Self::new()
    }
}
