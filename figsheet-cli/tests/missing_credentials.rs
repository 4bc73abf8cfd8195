//! The binary must fail fast on credential problems, before any network call.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_figma_token_exits_nonzero_naming_the_variable() {
    Command::cargo_bin("figsheet")
        .expect("binary")
        .env_remove("FIGMA_TOKEN")
        .env_remove("GOOGLE_CREDENTIALS")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FIGMA_TOKEN"));
}

#[test]
fn missing_google_credentials_exits_nonzero_naming_the_variable() {
    Command::cargo_bin("figsheet")
        .expect("binary")
        .env("FIGMA_TOKEN", "figd_test")
        .env_remove("GOOGLE_CREDENTIALS")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GOOGLE_CREDENTIALS"));
}

#[test]
fn malformed_google_credentials_fail_before_any_fetch() {
    Command::cargo_bin("figsheet")
        .expect("binary")
        .env("FIGMA_TOKEN", "figd_test")
        .env("GOOGLE_CREDENTIALS", "{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GOOGLE_CREDENTIALS"));
}
