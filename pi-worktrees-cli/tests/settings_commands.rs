//! Integration tests for the settings commands.
//!
//! These tests run the real binary against a settings file inside a temp
//! directory and check stdout, stderr, exit codes and the file on disk.

mod common;

use common::TestEnv;
use predicates::prelude::*;
use serde_json::json;

// ============================================================================
// show
// ============================================================================

#[test]
fn test_show_without_file_prints_defaults() {
    let env = TestEnv::new();

    assert_eq!(env.show(), json!({"worktree": {}}));
    assert!(!env.settings_file.exists());
}

#[test]
fn test_show_normalizes_legacy_file() {
    let env = TestEnv::new();
    env.write_settings(r#"{"parentDir": "/legacy", "theme": "dark"}"#);

    assert_eq!(env.show(), json!({"worktree": {"parentDir": "/legacy"}}));
}

#[test]
fn test_show_layers_goes_to_stderr() {
    let env = TestEnv::new();
    env.write_settings(r#"{"worktree": {"onCreate": "make"}}"#);

    env.command()
        .arg("show")
        .arg("--layers")
        .assert()
        .success()
        .stderr(predicate::str::contains("defaults"))
        .stderr(predicate::str::contains("environment"))
        .stdout(predicate::str::contains("\"onCreate\": \"make\""));
}

#[test]
fn test_show_invalid_file_is_config_error() {
    let env = TestEnv::new();
    env.write_settings(r#"{"worktree": {"parentDir": 42}}"#);

    env.command()
        .arg("show")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("worktree.parentDir"));
}

// ============================================================================
// get
// ============================================================================

#[test]
fn test_get_prints_value() {
    let env = TestEnv::new();
    env.write_settings(r#"{"worktree": {"parentDir": "~/wt"}}"#);

    env.command()
        .arg("get")
        .arg("parent-dir")
        .assert()
        .success()
        .stdout("~/wt\n");
}

#[test]
fn test_get_unset_value_exits_one() {
    let env = TestEnv::new();

    env.command()
        .arg("get")
        .arg("on-create")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Setting 'on-create' is not set"));
}

#[test]
fn test_get_unknown_key_is_usage_error() {
    let env = TestEnv::new();

    env.command().arg("get").arg("branch").assert().failure();
}

#[test]
fn test_env_overrides_file_for_get() {
    let env = TestEnv::new();
    env.write_settings(r#"{"worktree": {"parentDir": "/file"}}"#);

    env.command()
        .env("PI_WORKTREES_WORKTREE__PARENTDIR", "/env")
        .arg("get")
        .arg("parent-dir")
        .assert()
        .success()
        .stdout("/env\n");
}

// ============================================================================
// set
// ============================================================================

#[test]
fn test_set_creates_file_and_directories() {
    let env = TestEnv::new();

    env.command()
        .arg("set")
        .arg("--parent-dir")
        .arg("/tmp/wt")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"parentDir\": \"/tmp/wt\""));

    assert_eq!(
        env.read_settings(),
        json!({"worktree": {"parentDir": "/tmp/wt"}})
    );
}

#[test]
fn test_set_keeps_other_file_settings() {
    let env = TestEnv::new();
    env.write_settings(r#"{"onCreate": "make"}"#);

    env.command()
        .arg("set")
        .arg("--parent-dir")
        .arg("/wt")
        .assert()
        .success();

    assert_eq!(
        env.read_settings(),
        json!({"worktree": {"parentDir": "/wt", "onCreate": "make"}})
    );
}

#[test]
fn test_set_unset_removes_key() {
    let env = TestEnv::new();
    env.write_settings(r#"{"worktree": {"parentDir": "/wt", "onCreate": "make"}}"#);

    env.command()
        .arg("set")
        .arg("--unset-on-create")
        .assert()
        .success();

    assert_eq!(env.read_settings(), json!({"worktree": {"parentDir": "/wt"}}));
}

#[test]
fn test_set_does_not_persist_env_overrides() {
    let env = TestEnv::new();

    env.command()
        .env("PI_WORKTREES_WORKTREE__PARENTDIR", "/env")
        .arg("set")
        .arg("--on-create")
        .arg("npm ci")
        .assert()
        .success()
        .stdout(predicate::str::contains("/env"));

    assert_eq!(env.read_settings(), json!({"worktree": {"onCreate": "npm ci"}}));
}

#[test]
fn test_set_repairs_invalid_file() {
    let env = TestEnv::new();
    env.write_settings(r#"{"worktree": {"parentDir": 42, "onCreate": "make"}}"#);

    env.command()
        .arg("set")
        .arg("--parent-dir")
        .arg("/fixed")
        .assert()
        .success()
        .stderr(predicate::str::contains("worktree.parentDir"));

    assert_eq!(env.read_settings(), json!({"worktree": {"parentDir": "/fixed"}}));
    env.command().arg("validate").assert().success();
}

#[test]
fn test_set_with_invalid_env_override_still_saves() {
    let env = TestEnv::new();

    env.command()
        .env("PI_WORKTREES_WORKTREE__BRANCH", "main")
        .arg("set")
        .arg("--on-create")
        .arg("make")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"onCreate\": \"make\""))
        .stderr(predicate::str::contains("Environment overrides not applied"));

    assert_eq!(env.read_settings(), json!({"worktree": {"onCreate": "make"}}));
}

#[test]
fn test_set_without_changes_is_invalid() {
    let env = TestEnv::new();

    env.command()
        .arg("set")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("nothing to change"));
    assert!(!env.settings_file.exists());
}

#[test]
fn test_set_conflicting_flags_rejected() {
    let env = TestEnv::new();

    env.command()
        .arg("set")
        .arg("--parent-dir")
        .arg("/a")
        .arg("--unset-parent-dir")
        .assert()
        .failure();
}

#[test]
fn test_set_into_unwritable_location_is_io_error() {
    let env = TestEnv::new();
    // A regular file where the settings directory should go
    std::fs::write(env.path().join(".pi"), "not a directory").unwrap();
    let settings_file = env.path().join(".pi").join("settings.json");

    env.command_bare()
        .arg("--settings-file")
        .arg(&settings_file)
        .arg("set")
        .arg("--parent-dir")
        .arg("/x")
        .assert()
        .failure();
}

// ============================================================================
// path
// ============================================================================

#[test]
fn test_path_with_override() {
    let env = TestEnv::new();

    env.command()
        .arg("path")
        .assert()
        .success()
        .stdout(format!("{}\n", env.settings_file.display()));
}

#[test]
fn test_path_default_location_under_home() {
    let env = TestEnv::new();

    env.command_bare()
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            ".pi/agent/pi-worktrees-settings.json\n",
        ));
}

#[test]
fn test_path_does_not_load_invalid_file() {
    let env = TestEnv::new();
    env.write_settings("{ not json");

    env.command().arg("path").assert().success();
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_valid_file() {
    let env = TestEnv::new();
    env.write_settings(r#"{"worktree": {"parentDir": "/wt"}}"#);

    env.command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_explicit_file_argument() {
    let env = TestEnv::new();
    let file = env.path().join("other.json");
    std::fs::write(&file, r#"{"worktree": {"branch": "main"}}"#).unwrap();

    env.command()
        .arg("validate")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("worktree.branch"));
}

#[test]
fn test_validate_ignores_environment() {
    let env = TestEnv::new();
    env.write_settings(r#"{"worktree": {}}"#);

    env.command()
        .env("PI_WORKTREES_WORKTREE__BRANCH", "main")
        .arg("validate")
        .assert()
        .success();
}

#[test]
fn test_validate_malformed_json() {
    let env = TestEnv::new();
    env.write_settings("{ not json");

    env.command()
        .arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_validate_missing_file() {
    let env = TestEnv::new();

    env.command()
        .arg("validate")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}

// ============================================================================
// Global options
// ============================================================================

#[test]
fn test_verbose_reports_save() {
    let env = TestEnv::new();

    env.command()
        .arg("--verbose")
        .arg("set")
        .arg("--on-create")
        .arg("make")
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved settings to"));
}

#[test]
fn test_quiet_suppresses_info() {
    let env = TestEnv::new();

    env.command()
        .arg("--quiet")
        .arg("set")
        .arg("--on-create")
        .arg("make")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();

    env.command_bare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("validate"));
}
