use predicates::prelude::*;
use tempfile::TempDir;

use crate::{sweeper_cmd, write_key};

#[test]
fn test_help() {
    let var = TempDir::new().unwrap();
    sweeper_cmd(&var)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Maintenance CLI"));
}

#[test]
fn test_version() {
    let var = TempDir::new().unwrap();
    sweeper_cmd(&var)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sweeper"));
}

#[test]
fn test_missing_credentials_is_fatal() {
    let var = TempDir::new().unwrap();
    sweeper_cmd(&var)
        .args(["run", "--snapshot", "--dry-run"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Credentials file not found"));
}

#[test]
fn test_malformed_credentials_is_fatal() {
    let var = TempDir::new().unwrap();
    std::fs::create_dir_all(var.path()).unwrap();
    std::fs::write(var.path().join("key.json"), "{ not json").unwrap();
    sweeper_cmd(&var)
        .args(["run", "--snapshot", "--dry-run"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid credentials"));
}

#[test]
fn test_missing_project_is_fatal() {
    let var = TempDir::new().unwrap();
    write_key(&var);
    sweeper_cmd(&var)
        .env_remove("GCP_PROJECT_ID")
        .args(["list", "--snapshot"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No project configured"));
}

#[test]
fn test_json_error_output() {
    let var = TempDir::new().unwrap();
    sweeper_cmd(&var)
        .args(["run", "--snapshot", "--dry-run", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"code\":\"credentials_not_found\""));
}
