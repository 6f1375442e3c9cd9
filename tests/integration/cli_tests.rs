//! CLI structure and offline error-path tests.

#![allow(clippy::expect_used)]

use std::io::Write as _;

use assert_cmd::Command;
use predicates::prelude::*;

fn lambda_deploy() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lambda-deploy"));
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write_descriptor(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write");
    file
}

const VALID_DESCRIPTOR: &str = "\
lambda:
  function_name: python-hello
  handler: handler.main
  runtime: python3.12
  role: arn:aws:iam::123456789012:role/lambda
";

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    lambda_deploy().assert().code(2).stderr(predicate::str::contains(
        "Deploys and reconciles AWS Lambda functions",
    ));
}

#[test]
fn test_cli_help_flag_shows_help() {
    lambda_deploy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    lambda_deploy()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lambda-deploy"));
}

// --- Command hierarchy tests ---

#[test]
fn test_help_shows_deploy_command() {
    lambda_deploy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy"));
}

#[test]
fn test_help_shows_list_command() {
    lambda_deploy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_help_shows_invoke_command() {
    lambda_deploy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("invoke"));
}

#[test]
fn test_help_shows_delete_command() {
    lambda_deploy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_help_shows_account_command() {
    lambda_deploy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("account"));
}

// --- Error handling tests ---

#[test]
fn test_unknown_command_exits_with_error() {
    lambda_deploy()
        .arg("nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_deploy_requires_descriptor_and_zip_file() {
    lambda_deploy()
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_delete_requires_name() {
    lambda_deploy()
        .arg("delete")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

// --- Offline deploy failure paths ---

#[test]
fn test_deploy_missing_descriptor_file_fails() {
    lambda_deploy()
        .args([
            "deploy",
            "--descriptor",
            "/nonexistent/lambda.yml",
            "--zip-file",
            "/nonexistent/function.zip",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read descriptor"));
}

#[test]
fn test_deploy_invalid_descriptor_lists_every_violation() {
    let file = write_descriptor("lambda:\n  function_name: python-hello\n");
    lambda_deploy()
        .args([
            "deploy",
            "--descriptor",
            file.path().to_str().expect("utf8 path"),
            "--zip-file",
            "/nonexistent/function.zip",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing handler"))
        .stderr(predicate::str::contains("missing runtime"))
        .stderr(predicate::str::contains("missing role"));
}

#[test]
fn test_deploy_missing_artifact_fails_before_any_remote_call() {
    let file = write_descriptor(VALID_DESCRIPTOR);
    lambda_deploy()
        .args([
            "deploy",
            "--descriptor",
            file.path().to_str().expect("utf8 path"),
            "--zip-file",
            "/nonexistent/function.zip",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read artifact"));
}

// --- Global flags tests ---

#[test]
fn test_global_quiet_flag_accepted() {
    let file = write_descriptor("lambda: {}\n");
    lambda_deploy()
        .args([
            "--quiet",
            "deploy",
            "--descriptor",
            file.path().to_str().expect("utf8 path"),
            "--zip-file",
            "/nonexistent/function.zip",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing function_name"));
}

#[test]
fn test_global_no_color_flag_accepted() {
    lambda_deploy()
        .args(["--no-color", "--help"])
        .assert()
        .success();
}

#[test]
fn test_no_color_env_var_accepted() {
    lambda_deploy()
        .env("NO_COLOR", "true")
        .arg("--help")
        .assert()
        .success();
}
