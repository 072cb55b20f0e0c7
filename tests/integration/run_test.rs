use predicates::prelude::*;
use tempfile::TempDir;

use sweeper::model::VersionState;

use crate::{seed_snapshot, snapshot_states, sweeper_cmd, version, write_key};

#[test]
fn test_empty_project_reports_zero_totals() {
    let var = TempDir::new().unwrap();
    write_key(&var);

    sweeper_cmd(&var)
        .args(["run", "--snapshot", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Retrieved secrets: 0"))
        .stdout(predicate::str::contains("Retrieved secret versions: 0"));
}

#[test]
fn test_sweep_keeps_newest_and_skips_non_enabled() {
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
        .args(["run", "--snapshot"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "keep projects/test-proj/secrets/db-password/versions/2",
        ))
        .stdout(predicate::str::contains("2 candidate(s)"))
        .stdout(predicate::str::contains("1 version(s) disabled, 1 skipped, 0 failed."));

    let states = snapshot_states(&var, "db-password");
    assert_eq!(
        states,
        vec![
            ("1".to_string(), VersionState::Disabled),
            ("2".to_string(), VersionState::Enabled),
            ("3".to_string(), VersionState::Disabled),
        ]
    );
}

#[test]
fn test_dry_run_mutates_nothing() {
    let var = TempDir::new().unwrap();
    write_key(&var);
    seed_snapshot(
        &var,
        "api-key",
        vec![
            version("api-key", 1, 100, VersionState::Enabled),
            version("api-key", 2, 200, VersionState::Enabled),
        ],
    );

    sweeper_cmd(&var)
        .args(["run", "--snapshot", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 version(s) disabled"))
        .stdout(predicate::str::contains("(dry run)"));

    let states = snapshot_states(&var, "api-key");
    assert_eq!(states[0], ("1".to_string(), VersionState::Enabled));
    assert_eq!(states[1], ("2".to_string(), VersionState::Enabled));
}

#[test]
fn test_second_sweep_is_a_no_op() {
    let var = TempDir::new().unwrap();
    write_key(&var);
    seed_snapshot(
        &var,
        "token",
        vec![
            version("token", 1, 100, VersionState::Enabled),
            version("token", 2, 200, VersionState::Enabled),
        ],
    );

    sweeper_cmd(&var)
        .args(["run", "--snapshot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 version(s) disabled"));

    sweeper_cmd(&var)
        .args(["run", "--snapshot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 version(s) disabled, 1 skipped, 0 failed."));
}

#[test]
fn test_single_version_secret_is_untouched() {
    let var = TempDir::new().unwrap();
    write_key(&var);
    seed_snapshot(
        &var,
        "lonely",
        vec![version("lonely", 1, 100, VersionState::Enabled)],
    );

    sweeper_cmd(&var)
        .args(["run", "--snapshot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 version(s) disabled, 0 skipped, 0 failed."));

    let states = snapshot_states(&var, "lonely");
    assert_eq!(states, vec![("1".to_string(), VersionState::Enabled)]);
}

#[test]
fn test_run_json_output() {
    let var = TempDir::new().unwrap();
    write_key(&var);
    seed_snapshot(
        &var,
        "svc",
        vec![
            version("svc", 1, 100, VersionState::Enabled),
            version("svc", 2, 200, VersionState::Enabled),
        ],
    );

    sweeper_cmd(&var)
        .args(["run", "--snapshot", "--dry-run", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dry_run\":true"))
        .stdout(predicate::str::contains("\"disabled\":1"))
        .stdout(predicate::str::contains("\"secrets\":1"));
}

#[test]
fn test_dry_run_env_flag() {
    let var = TempDir::new().unwrap();
    write_key(&var);
    seed_snapshot(
        &var,
        "env-flagged",
        vec![
            version("env-flagged", 1, 100, VersionState::Enabled),
            version("env-flagged", 2, 200, VersionState::Enabled),
        ],
    );

    sweeper_cmd(&var)
        .env("SWEEPER_DRY_RUN", "true")
        .args(["run", "--snapshot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(dry run)"));

    let states = snapshot_states(&var, "env-flagged");
    assert_eq!(states[0].1, VersionState::Enabled);
}
