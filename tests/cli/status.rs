//! Tests for `secret-baker status`.

use crate::support::*;

#[test]
fn test_status_lists_declared_secrets() {
    let t = Test::with_config(MAPPING_CONFIG);

    let output = t.status();
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.contains("DB_PASSWORD ← /prod/db/password"));
    assert!(out.contains("API_KEY ← /prod/api/key"));
    assert!(out.contains("absent"));
}

#[test]
fn test_status_shows_file_state() {
    let t = Test::with_config(EMPTY_SECRETS_CONFIG);
    assert_success(&t.package(&[]));

    let output = t.status();
    assert_success(&output);
    assert_stdout_contains(&output, "present (0 secrets)");
    assert_stdout_contains(&output, "no secrets declared");
}

#[test]
fn test_status_rejects_bad_declaration() {
    let t = Test::with_config(STRING_SECRETS_CONFIG);

    let output = t.status();
    assert_failure(&output);
}
