//! Shared test doubles: a call-counting rule and a recording input stub.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use form_rail::{InputHandle, Rule, StateClass, Verdict};

/// Rule returning a fixed verdict and counting how often it was evaluated.
pub struct CountingRule {
    calls: Arc<AtomicUsize>,
    verdict: Verdict,
}

impl CountingRule {
    pub fn passing() -> (Self, Arc<AtomicUsize>) {
        Self::with_verdict(Verdict::pass())
    }

    pub fn failing(message: &str) -> (Self, Arc<AtomicUsize>) {
        Self::with_verdict(Verdict::fail(message))
    }

    fn with_verdict(verdict: Verdict) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (Self { calls: calls.clone(), verdict }, calls)
    }
}

#[async_trait]
impl Rule for CountingRule {
    async fn evaluate(&self, _value: &str) -> Verdict {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.verdict.clone()
    }
}

/// In-memory input handle recording every class toggle and error-text write.
#[derive(Clone, Default)]
pub struct StubInput {
    inner: Arc<StubInner>,
}

#[derive(Default)]
struct StubInner {
    value: Mutex<String>,
    classes: Mutex<HashSet<StateClass>>,
    error_text: Mutex<String>,
}

impl StubInput {
    pub fn with_value(value: &str) -> Self {
        let stub = Self::default();
        stub.set_value(value);
        stub
    }

    pub fn set_value(&self, value: &str) {
        *self.inner.value.lock().unwrap() = value.to_string();
    }

    pub fn has_class(&self, class: StateClass) -> bool {
        self.inner.classes.lock().unwrap().contains(&class)
    }

    pub fn error_text(&self) -> String {
        self.inner.error_text.lock().unwrap().clone()
    }
}

impl InputHandle for StubInput {
    fn value(&self) -> String {
        self.inner.value.lock().unwrap().clone()
    }

    fn set_class(&self, class: StateClass, enabled: bool) {
        let mut classes = self.inner.classes.lock().unwrap();
        if enabled {
            classes.insert(class);
        } else {
            classes.remove(&class);
        }
    }

    fn set_error_text(&self, text: &str) {
        *self.inner.error_text.lock().unwrap() = text.to_string();
    }
}
