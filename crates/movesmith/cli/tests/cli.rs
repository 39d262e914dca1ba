//! End-to-end tests against the built `movesmith` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn movesmith() -> Command {
    let mut cmd = Command::cargo_bin("movesmith").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("MOVESMITH_CONFIG")
        .env_remove("MOVESMITH_OUTPUT");
    cmd
}

#[test]
fn integration_generate_token_defaults() {
    movesmith()
        .args(["generate", "create", "a", "token"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("module 0x1::MyToken {"));
}

#[test]
fn integration_generate_with_flags() {
    movesmith()
        .args([
            "generate",
            "nft",
            "--name",
            "Art",
            "--address",
            "0xA11CE",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("module 0xA11CE::Art {"));
}

#[test]
fn integration_generate_json() {
    movesmith()
        .args(["--output", "json", "generate", "open", "a", "marketplace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"intent\": \"marketplace\""));
}

#[test]
fn integration_generate_rejects_bad_param() {
    movesmith()
        .args(["generate", "token", "--param", "oops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn integration_generate_unrecognized_prints_fallback() {
    movesmith()
        .args(["generate", "bake", "bread"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I can help you generate Move contracts"));
}

#[test]
fn integration_explain_unknown() {
    movesmith()
        .args(["explain", "banana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Concept not found"));
}

#[test]
fn integration_review_from_stdin() {
    movesmith()
        .arg("review")
        .write_stdin("fun f(a: address) { borrow_global_mut<T>(a); }")
        .assert()
        .success()
        .stdout(predicate::str::contains("⚠️ Warning:"))
        .stdout(predicate::str::contains("💡 Suggestion:"));
}

#[test]
fn integration_analyze_missing_file_fails() {
    movesmith()
        .args(["analyze", "/nonexistent/contract.move"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn integration_templates_listing() {
    movesmith()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("move.token"))
        .stdout(predicate::str::contains("move.module"));
}

#[test]
fn integration_interactive_is_default() {
    movesmith()
        .write_stdin("4\nCounter\n\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("module 0x1::Counter {"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn integration_env_selects_output_format() {
    movesmith()
        .env("MOVESMITH_OUTPUT", "yaml")
        .args(["explain", "signer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("concept: signer"));
}
