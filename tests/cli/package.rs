//! Tests for `secret-baker package`.

use crate::support::*;
use serde_json::json;

#[test]
fn test_package_without_secrets_writes_empty_object() {
    let t = Test::with_config(EMPTY_SECRETS_CONFIG);

    let output = t.package(&[]);
    assert_success(&output);

    assert_secrets_json(&t, SECRETS_FILE, json!({}));
    assert_stdout_contains(&output, "Secret Baker: Writing secrets to secret-baker-secrets.json");
}

#[test]
fn test_package_without_plugin_block() {
    let t = Test::with_config(NO_PLUGIN_CONFIG);

    let output = t.package(&[]);
    assert_success(&output);
    assert_secrets_json(&t, SECRETS_FILE, json!({}));
}

#[test]
fn test_package_lists_file_in_include() {
    let t = Test::with_config(EMPTY_SECRETS_CONFIG);

    let output = t.package(&[]);
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.contains("Package include"));
    assert!(out.contains(&format!("• {}", SECRETS_FILE)));
}

#[test]
fn test_package_custom_file_path() {
    let t = Test::with_config(CUSTOM_PATH_CONFIG);

    let output = t.package(&[]);
    assert_success(&output);

    assert!(t.exists("baked.json"));
    assert!(!t.exists(SECRETS_FILE));
    assert_stdout_contains(&output, "baked.json");
}

#[test]
fn test_package_overwrites_previous_file() {
    let t = Test::with_config(EMPTY_SECRETS_CONFIG);
    t.write(SECRETS_FILE, r#"{"OLD": {"ciphertext": "x", "arn": "y"}}"#);

    let output = t.package(&[]);
    assert_success(&output);
    assert_secrets_json(&t, SECRETS_FILE, json!({}));
}

#[test]
fn test_package_json_service_config() {
    let t = Test::new();
    t.write(
        "serverless.json",
        r#"{"custom": {"secretBaker": {"secrets": [], "filePath": "from-json.json"}}}"#,
    );

    let output = t.package(&["--config", "serverless.json"]);
    assert_success(&output);
    assert!(t.exists("from-json.json"));
}

#[test]
fn test_package_string_declaration_fails_before_lookup() {
    let t = Test::with_config(STRING_SECRETS_CONFIG);

    let output = t.package(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "must be a list or a mapping");
    assert!(!t.exists(SECRETS_FILE));
}

#[test]
fn test_package_number_declaration_fails() {
    let t = Test::with_config(NUMBER_SECRETS_CONFIG);

    let output = t.package(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "got number");
    assert!(!t.exists(SECRETS_FILE));
}

#[test]
fn test_package_via_local_invoke_event() {
    let t = Test::with_config(EMPTY_SECRETS_CONFIG);

    let output = t.hook("before:invoke:local:invoke", &[]);
    assert_success(&output);
    assert!(t.exists(SECRETS_FILE));
}

#[test]
fn test_package_via_offline_event() {
    let t = Test::with_config(EMPTY_SECRETS_CONFIG);

    let output = t.hook("before:offline:start:init", &[]);
    assert_success(&output);
    assert!(t.exists(SECRETS_FILE));
}
