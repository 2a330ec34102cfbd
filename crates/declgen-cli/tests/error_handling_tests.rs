//! Tests for error messages, suggestions and exit codes.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn declgen(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("declgen");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("NO_COLOR", "1")
        .env_remove("DECLGEN_TEMPLATES_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn invalid_name_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    declgen(&dir)
        .args(["bigip", "as3", "bad#name"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid name 'bad#name'"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn interface_count_out_of_range() {
    let dir = TempDir::new().unwrap();
    declgen(&dir)
        .args(["bigip", "as3", "x", "--interfaces", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("interface count"))
        .stderr(predicate::str::contains("between 1 and 8"));
}

#[test]
fn bigip_needs_a_name_or_subcommand() {
    let dir = TempDir::new().unwrap();
    declgen(&dir)
        .arg("bigip")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("NAME"));
}

#[test]
fn invalid_tenant_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    declgen(&dir)
        .args(["bigip", "app", "x", "--tenant", "my tenant: x"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("tenant doesn't pass AS3 validation"))
        .stderr(predicate::str::contains("start with a letter"));
}

#[test]
fn invalid_vip_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    declgen(&dir)
        .args(["bigip", "app", "x", "--vip", "not-an-address"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not-an-address"));
}

#[test]
fn license_pool_without_host_is_rejected_by_clap() {
    let dir = TempDir::new().unwrap();
    declgen(&dir)
        .args(["bigip", "do", "x", "--license-pool-name", "pool"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bigiq-host"));
}

#[test]
fn missing_template_directory_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".declgen.toml"),
        "[templates]\nlocal_path = \"does-not-exist\"\n",
    )
    .unwrap();

    declgen(&dir)
        .args(["bigip", "as3", "x"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("templates directory not found"));
}

#[test]
fn missing_explicit_config_file() {
    let dir = TempDir::new().unwrap();
    declgen(&dir)
        .args(["--config", "nope.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn broken_template_is_reported() {
    let dir = TempDir::new().unwrap();
    let templates = dir.path().join("templates");
    fs::create_dir(&templates).unwrap();
    fs::write(templates.join("ts.yaml"), "{% if %}\n").unwrap();

    declgen(&dir)
        .env("DECLGEN_TEMPLATES_DIR", &templates)
        .args(["bigip", "ts", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ts.yaml"));
}

#[test]
fn unknown_config_key() {
    let dir = TempDir::new().unwrap();
    declgen(&dir)
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}
