use predicates::prelude::*;
use tempfile::TempDir;

use sweeper::model::VersionState;

use crate::{seed_snapshot, sweeper_cmd, version, write_key};

#[test]
fn test_list_without_snapshot_is_empty() {
    let var = TempDir::new().unwrap();
    write_key(&var);

    sweeper_cmd(&var)
        .args(["list", "--snapshot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Retrieved secrets: 0"))
        .stdout(predicate::str::contains("Retrieved secret versions: 0"));
}

#[test]
fn test_list_reports_version_counts() {
    let var = TempDir::new().unwrap();
    write_key(&var);
    seed_snapshot(
        &var,
        "db-password",
        vec![
            version("db-password", 1, 100, VersionState::Enabled),
            version("db-password", 2, 200, VersionState::Enabled),
            version("db-password", 3, 150, VersionState::Disabled),
        ],
    );

    sweeper_cmd(&var)
        .args(["list", "--snapshot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("db-password: 3 version(s), 2 enabled"))
        .stdout(predicate::str::contains("Retrieved secrets: 1"))
        .stdout(predicate::str::contains("Retrieved secret versions: 3"));
}

#[test]
fn test_list_does_not_mutate_snapshot() {
    let var = TempDir::new().unwrap();
    write_key(&var);
    seed_snapshot(
        &var,
        "stable",
        vec![
            version("stable", 1, 100, VersionState::Enabled),
            version("stable", 2, 200, VersionState::Enabled),
        ],
    );

    sweeper_cmd(&var)
        .args(["list", "--snapshot"])
        .assert()
        .success();

    let states = crate::snapshot_states(&var, "stable");
    assert_eq!(states[0].1, VersionState::Enabled);
    assert_eq!(states[1].1, VersionState::Enabled);
}

#[test]
fn test_list_json_output() {
    let var = TempDir::new().unwrap();
    write_key(&var);
    seed_snapshot(
        &var,
        "svc",
        vec![version("svc", 1, 100, VersionState::Enabled)],
    );

    sweeper_cmd(&var)
        .args(["list", "--snapshot", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_secrets\":1"))
        .stdout(predicate::str::contains("\"name\":\"svc\""));
}
