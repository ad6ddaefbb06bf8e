//! Exit codes and messages for failures.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn invalid_project_name_is_a_user_error() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("empty.toml");
    fs::write(&config, "").unwrap();

    cargo::cargo_bin_cmd!("anvil")
        .current_dir(tmp.path())
        .arg("--config")
        .arg(&config)
        .args(["new", "1clinic", "--yes", "--offline"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("1clinic"));

    assert!(!tmp.path().join("1clinic-api").exists());
}

#[test]
fn unknown_driver_is_rejected_by_the_parser() {
    cargo::cargo_bin_cmd!("anvil")
        .args(["new", "clinic", "--yes", "--db", "oracle"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("oracle"));
}

#[test]
fn api_conflicts_with_no_api() {
    cargo::cargo_bin_cmd!("anvil")
        .args(["new", "clinic", "--yes", "--api", "rest", "--no-api"])
        .assert()
        .code(2);
}

#[test]
fn unknown_config_key_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("empty.toml");
    fs::write(&config, "").unwrap();

    cargo::cargo_bin_cmd!("anvil")
        .current_dir(tmp.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "defaults.nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("defaults.nope"));
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    let tmp = TempDir::new().unwrap();
    cargo::cargo_bin_cmd!("anvil")
        .current_dir(tmp.path())
        .args(["--config", "does-not-exist.toml", "versions", "--offline"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn malformed_config_file_is_a_configuration_error() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("broken.toml");
    fs::write(&config, "[defaults\n").unwrap();

    cargo::cargo_bin_cmd!("anvil")
        .current_dir(tmp.path())
        .arg("--config")
        .arg(&config)
        .args(["versions", "--offline"])
        .assert()
        .code(4);
}

#[test]
fn missing_subcommand_prints_usage() {
    cargo::cargo_bin_cmd!("anvil")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
