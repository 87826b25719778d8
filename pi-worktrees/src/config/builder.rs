//! Builder for [`ConfigStore`] handles.

use crate::config::environment::{env_prefix, EnvironmentConfig};
use crate::config::loader::{default_settings_path, APP_NAME};
use crate::config::store::ConfigStore;
use crate::error::Result;
use std::path::PathBuf;

/// Configures and opens a [`ConfigStore`].
///
/// Defaults: the settings file at `~/.pi/agent/pi-worktrees-settings.json`
/// and `PI_WORKTREES_*` variables from the process environment.
///
/// # Examples
///
/// ```no_run
/// use pi_worktrees::config::ConfigStoreBuilder;
///
/// let store = ConfigStoreBuilder::new()
///     .with_settings_path("/tmp/pi/settings.json")
///     .skip_env()
///     .build()
///     .unwrap();
/// assert!(store.get_worktree_settings().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStoreBuilder {
    settings_path: Option<PathBuf>,
    app_name: String,
    env_vars: Option<Vec<(String, String)>>,
    skip_env: bool,
}

impl Default for ConfigStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStoreBuilder {
    /// Create a builder with default sources.
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings_path: None,
            app_name: APP_NAME.to_string(),
            env_vars: None,
            skip_env: false,
        }
    }

    /// Read and write settings at `path` instead of the default location.
    #[must_use]
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = Some(path.into());
        self
    }

    /// Derive the environment prefix from another application name.
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Use a fixed set of variables instead of the process environment.
    #[must_use]
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Ignore environment overrides entirely.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Open the store and perform the initial load.
    ///
    /// # Errors
    ///
    /// Returns an error if no settings path was given and the home directory
    /// is unknown, or if the initial load fails.
    pub fn build(self) -> Result<ConfigStore> {
        let settings_path = match self.settings_path {
            Some(path) => path,
            None => default_settings_path()?,
        };

        let env = if self.skip_env {
            None
        } else {
            let prefix = env_prefix(&self.app_name);
            Some(match self.env_vars {
                Some(vars) => EnvironmentConfig::with_vars(prefix, vars),
                None => EnvironmentConfig::new(prefix),
            })
        };

        let mut store = ConfigStore::unloaded(settings_path, env);
        store.load()?;
        Ok(store)
    }
}
