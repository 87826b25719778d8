//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by all commands and the
//! helpers that turn them into an opened settings store.

use crate::error::CliError;
use pi_worktrees::config::default_settings_path;
use pi_worktrees::{ConfigStore, ResolvedConfig};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Override the settings file location.
    pub settings_file: Option<PathBuf>,
}

/// Open the settings store for the given global options.
///
/// Layers are merged with precedence:
/// 1. Environment variables (`PI_WORKTREES_*`)
/// 2. The settings file (`--settings-file` or the default location)
/// 3. Built-in defaults
pub fn open_store(global: &GlobalOptions) -> Result<ConfigStore, CliError> {
    let mut builder = ConfigStore::builder();
    if let Some(path) = &global.settings_file {
        builder = builder.with_settings_path(path);
    }
    Ok(builder.build()?)
}

/// The settings file the options point at, without loading it.
pub fn settings_path(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.settings_file {
        Some(path) => Ok(path.clone()),
        None => Ok(default_settings_path()?),
    }
}

/// Render a config as pretty JSON for stdout.
pub fn format_config(config: &ResolvedConfig) -> Result<String, CliError> {
    serde_json::to_string_pretty(config).map_err(|e| CliError::Library(e.into()))
}
