//! Tests for the validator chain and the preset pipelines.

use std::sync::atomic::Ordering;

use form_rail::validator::presets;
use form_rail::Validator;

use crate::common::CountingRule;

#[tokio::test]
async fn empty_validator_passes_every_value() {
    assert!(Validator::new().validate("").await.is_pass());
    assert!(Validator::new().validate("anything").await.is_pass());
}

#[tokio::test]
async fn rules_after_the_first_failure_are_never_invoked() {
    let (first, first_calls) = CountingRule::failing("first failed");
    let (second, second_calls) = CountingRule::passing();

    let verdict = Validator::new().add_rule(first).add_rule(second).validate("x").await;

    assert_eq!(verdict.message(), Some("first failed"));
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn rules_run_in_insertion_order() {
    let (first, _) = CountingRule::failing("first failed");
    let (second, _) = CountingRule::failing("second failed");

    let verdict = Validator::new().add_rule(first).add_rule(second).validate("x").await;

    assert_eq!(verdict.message(), Some("first failed"));
}

#[tokio::test]
async fn all_passing_rules_yield_a_pass() {
    let (first, first_calls) = CountingRule::passing();
    let (second, second_calls) = CountingRule::passing();

    let verdict = Validator::new().add_rule(first).add_rule(second).validate("x").await;

    assert!(verdict.is_pass());
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn username_accepts_valid_names() {
    assert!(presets::username().validate("abc").await.is_pass());
    assert!(presets::username().validate("ab_12").await.is_pass());
    assert!(presets::username().validate("alice-smith").await.is_pass());
}

#[tokio::test]
async fn username_rejects_short_names_with_the_minimum() {
    let verdict = presets::username().validate("ab").await;
    assert!(verdict.message().unwrap().contains("at least 3"));
}

#[tokio::test]
async fn username_rejects_disallowed_characters() {
    let verdict = presets::username().validate("abc def").await;
    assert!(verdict.message().unwrap().contains("letters, numbers"));
}

#[tokio::test]
async fn username_rejects_overlong_names_with_the_maximum() {
    let verdict = presets::username().validate(&"a".repeat(21)).await;
    assert!(verdict.message().unwrap().contains("at most 20"));
}

#[tokio::test]
async fn password_accepts_a_mixed_password() {
    assert!(presets::password().validate("Passw0rd").await.is_pass());
}

#[tokio::test]
async fn password_rejects_missing_character_classes() {
    let verdict = presets::password().validate("password").await;
    assert!(verdict.message().unwrap().contains("lowercase and uppercase"));
}

#[tokio::test]
async fn password_length_failure_takes_precedence_over_the_mix_check() {
    // "PASS1" also lacks a lowercase letter; the earlier rule must win.
    let verdict = presets::password().validate("PASS1").await;
    assert!(verdict.message().unwrap().contains("at least 6"));
}

#[tokio::test]
async fn display_name_boundaries() {
    assert!(presets::display_name().validate("").await.message().unwrap().contains("at least 1"));
    assert!(presets::display_name().validate(&"x".repeat(20)).await.is_pass());
    assert!(presets::display_name()
        .validate(&"x".repeat(21))
        .await
        .message()
        .unwrap()
        .contains("at most 20"));
}
