//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate the settings file
//! - Fixtures for writing settings files

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Prefix of every variable the binary reads overrides from.
const ENV_PREFIX: &str = "PI_WORKTREES_";

/// Test environment with an isolated settings file.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Settings file used by `command()` (not created yet)
    pub settings_file: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let settings_file = temp_path
            .join(".pi")
            .join("agent")
            .join("pi-worktrees-settings.json");

        Self {
            temp_dir,
            temp_path,
            settings_file,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Every `PI_WORKTREES_*` variable of the test process is still removed
    /// and `HOME` points at the temp directory, so the default path never
    /// touches the real home directory.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pi-worktrees").expect("Failed to find pi-worktrees binary");
        for (var, _) in std::env::vars_os() {
            if var.to_string_lossy().starts_with(ENV_PREFIX) {
                cmd.env_remove(var);
            }
        }
        cmd.env("HOME", &self.temp_path);
        cmd
    }

    /// Get a command builder with `--settings-file` pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--settings-file").arg(&self.settings_file);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write raw content to the settings file, creating its directory.
    pub fn write_settings(&self, content: &str) {
        std::fs::create_dir_all(self.settings_file.parent().unwrap())
            .expect("Failed to create settings directory");
        std::fs::write(&self.settings_file, content).expect("Failed to write settings");
    }

    /// Read the settings file back as JSON.
    pub fn read_settings(&self) -> serde_json::Value {
        let content =
            std::fs::read_to_string(&self.settings_file).expect("Failed to read settings");
        serde_json::from_str(&content).expect("Settings file is not valid JSON")
    }

    /// Run `show` and parse stdout as JSON.
    pub fn show(&self) -> serde_json::Value {
        let output = self
            .command()
            .arg("show")
            .output()
            .expect("Failed to run show command");

        assert!(
            output.status.success(),
            "Show failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("Show output is not valid JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
