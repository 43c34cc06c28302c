//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("secret-baker") || out.contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_missing_config_fails_with_hint() {
    let t = Test::new();

    t.cmd()
        .arg("package")
        .assert()
        .failure()
        .stderr(predicate::str::contains("service config not found"))
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn test_malformed_param_fails() {
    let t = Test::with_config(EMPTY_SECRETS_CONFIG);

    let output = t.package(&["--param", "a=1,broken"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "malformed param 'broken'");
    assert!(!t.exists(SECRETS_FILE));
}

#[test]
fn test_malformed_param_checked_before_config() {
    let t = Test::new();

    t.cmd()
        .args(["package", "--param", "broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed param").and(predicate::str::contains("key=value")));
}

#[test]
fn test_malformed_service_config() {
    let t = Test::with_config("this is not valid toml { [ }");

    let output = t.package(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse service config");
}

#[test]
fn test_bad_file_path_type() {
    let t = Test::with_config("[custom.secretBaker]\nfilePath = 7\n");

    let output = t.package(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "filePath must be a string");
}

#[test]
fn test_verbose_flag_accepted() {
    let t = Test::with_config(EMPTY_SECRETS_CONFIG);

    let output = t.package(&["--verbose"]);
    assert_success(&output);
}

#[test]
fn test_default_no_debug_output() {
    let t = Test::with_config(EMPTY_SECRETS_CONFIG);

    let output = t.package(&[]);
    assert_success(&output);
    let err = stderr(&output);
    assert!(!err.contains("DEBUG") && !err.contains("TRACE"));
}

#[test]
fn test_log_env_var_enables_debug() {
    let t = Test::with_config(EMPTY_SECRETS_CONFIG);

    t.cmd()
        .env("SECRET_BAKER_LOG", "secret_baker=debug")
        .arg("package")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_config_from_env_var() {
    let t = Test::new();
    t.write("other.toml", "[custom.secretBaker]\nfilePath = \"env.json\"\n");

    let output = t
        .cmd()
        .env("SECRET_BAKER_CONFIG", "other.toml")
        .arg("package")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.exists("env.json"));
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_secret-baker") || out.contains("complete"));
}
