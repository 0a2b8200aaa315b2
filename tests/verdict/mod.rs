//! Tests for the verdict value type.

use form_rail::Verdict;

#[test]
fn factories_and_accessors() {
    let ok = Verdict::pass();
    assert!(ok.is_pass());
    assert!(!ok.is_fail());
    assert_eq!(ok.message(), None);

    let bad = Verdict::fail("too short");
    assert!(bad.is_fail());
    assert_eq!(bad.message(), Some("too short"));
    assert_eq!(bad.into_message(), Some("too short".to_string()));
}

#[test]
fn equality_is_structural() {
    assert_eq!(Verdict::pass(), Verdict::pass());
    assert_eq!(Verdict::fail("x"), Verdict::fail("x"));
    assert_ne!(Verdict::fail("x"), Verdict::fail("y"));
    assert_ne!(Verdict::pass(), Verdict::fail("x"));
}

#[test]
#[cfg(feature = "serde")]
fn verdict_serde_round_trip() {
    let bad = Verdict::fail("too short");
    let serialized = serde_json::to_string(&bad).unwrap();
    let deserialized: Verdict = serde_json::from_str(&serialized).unwrap();
    assert_eq!(bad, deserialized);
}
