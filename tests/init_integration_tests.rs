//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    sortbench!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(fixture.path().join(".sortbench.toml")).unwrap();
    assert!(content.contains("[algorithms.shellsort]"));
    assert!(content.contains("[algorithms.cyclesort]"));
}

#[test]
fn init_creates_config_at_custom_path() {
    let fixture = TestFixture::new();
    let custom_path = fixture.path().join("custom.toml");

    sortbench!()
        .current_dir(fixture.path())
        .args(["init", "--output", custom_path.to_str().unwrap()])
        .assert()
        .success();

    assert!(custom_path.exists());
    assert!(!fixture.path().join(".sortbench.toml").exists());
}

#[test]
fn init_fails_if_file_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing");

    sortbench!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing");

    sortbench!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.path().join(".sortbench.toml")).unwrap();
    assert!(content.contains("version = \"1\""));
}

#[test]
fn generated_config_is_accepted_by_render() {
    let fixture = TestFixture::new();

    sortbench!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    sortbench!()
        .current_dir(fixture.path())
        .args(["render"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shellsort: skipped"));
}
