//! The settings store handle.

use crate::config::builder::ConfigStoreBuilder;
use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::normalize::{normalize, normalize_settings};
use crate::config::persistence::write_settings_file;
use crate::config::schema::{ResolvedConfig, WorktreeSettings};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Owns the current settings snapshot and the sources it was loaded from.
///
/// The snapshot is replaced as a whole by [`load`](Self::load),
/// [`reload`](Self::reload) and
/// [`save_worktree_settings`](Self::save_worktree_settings). A failed load
/// leaves the previous snapshot in place.
///
/// # Examples
///
/// ```no_run
/// use pi_worktrees::config::{ConfigStore, WorktreeSettings};
///
/// let mut store = ConfigStore::open().unwrap();
/// store
///     .save_worktree_settings(&WorktreeSettings::default().with_parent_dir("/tmp/wt"))
///     .unwrap();
/// assert_eq!(store.get_worktree_settings().parent_dir.as_deref(), Some("/tmp/wt"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    settings_path: PathBuf,
    env: Option<EnvironmentConfig>,
    layers: Vec<ConfigSource>,
    current: ResolvedConfig,
}

impl ConfigStore {
    /// Open a store with the default settings path and process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown or the initial
    /// load fails.
    pub fn open() -> Result<Self> {
        ConfigStoreBuilder::new().build()
    }

    /// Start configuring a store.
    #[must_use]
    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::new()
    }

    pub(crate) fn unloaded(settings_path: PathBuf, env: Option<EnvironmentConfig>) -> Self {
        Self {
            settings_path,
            env,
            layers: Vec::new(),
            current: ResolvedConfig::default(),
        }
    }

    /// Re-read every layer, normalize, and replace the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or parsed, or if
    /// the merged value fails validation.
    pub fn load(&mut self) -> Result<ResolvedConfig> {
        let layers = ConfigLoader::load_all(Some(&self.settings_path), self.env.as_ref())?;
        let merged = ConfigMerger::merge(&layers);
        let resolved = normalize(&merged)?;

        log::debug!(
            "Loaded settings from {} layer(s): {:?}",
            layers.len(),
            resolved.worktree
        );

        self.layers = layers;
        self.current = resolved;
        Ok(self.current.clone())
    }

    /// Refresh the snapshot from the environment and the settings file.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn reload(&mut self) -> Result<ResolvedConfig> {
        self.load()
    }

    /// The current snapshot.
    #[must_use]
    pub fn config(&self) -> &ResolvedConfig {
        &self.current
    }

    /// The worktree settings of the current snapshot. No I/O.
    #[must_use]
    pub fn get_worktree_settings(&self) -> &WorktreeSettings {
        &self.current.worktree
    }

    /// Persist `settings` to the settings file and reload.
    ///
    /// The settings are normalized first, replace the whole file content,
    /// and the returned snapshot has environment overrides layered on top of
    /// what was just written.
    ///
    /// # Errors
    ///
    /// Returns a validation error for invalid settings, an I/O error if the
    /// directory or file cannot be written, or any error from the reload.
    pub fn save_worktree_settings(&mut self, settings: &WorktreeSettings) -> Result<ResolvedConfig> {
        let normalized = normalize_settings(settings)?;
        write_settings_file(&self.settings_path, &normalized)?;
        self.load()
    }

    /// Settings as stored in the file alone, without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or is invalid.
    pub fn file_settings(&self) -> Result<WorktreeSettings> {
        let layers = ConfigLoader::load_all(Some(&self.settings_path), None)?;
        Ok(normalize(&ConfigMerger::merge(&layers))?.worktree)
    }

    /// Path of the settings file this store reads and writes.
    #[must_use]
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Layers used by the most recent successful load, lowest precedence first.
    #[must_use]
    pub fn layers(&self) -> &[ConfigSource] {
        &self.layers
    }
}
