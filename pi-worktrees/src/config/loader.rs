//! Settings layer discovery and loading.
//!
//! This module produces the raw layers (defaults, settings file, environment)
//! that [`ConfigMerger`](crate::config::ConfigMerger) combines.

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::WORKTREE_KEY;
use crate::error::{Error, Result};
use serde_json::{json, Value};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Application name; also the source of the environment prefix.
pub const APP_NAME: &str = "pi-worktrees";

/// File name of the settings file.
pub const SETTINGS_FILE_NAME: &str = "pi-worktrees-settings.json";

/// Where a layer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerOrigin {
    /// Built-in defaults.
    Defaults,
    /// The settings file at the given path.
    File(PathBuf),
    /// Prefixed environment variables.
    Environment,
}

impl fmt::Display for LayerOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults => write!(f, "defaults"),
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Environment => write!(f, "environment"),
        }
    }
}

/// One raw settings layer.
///
/// # Examples
///
/// ```
/// use pi_worktrees::config::{ConfigSource, LayerOrigin};
/// use serde_json::json;
///
/// let defaults = ConfigSource {
///     origin: LayerOrigin::Defaults,
///     value: json!({"worktree": {}}),
/// };
/// assert_eq!(defaults.origin.to_string(), "defaults");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSource {
    /// Where this layer came from.
    pub origin: LayerOrigin,
    /// The layer's raw JSON value.
    pub value: Value,
}

/// Loads settings layers from their sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Collect all layers, lowest precedence first.
    ///
    /// Layers:
    /// 1. Defaults (`{"worktree": {}}`)
    /// 2. The settings file at `settings_path`, if given and present
    /// 3. Environment overrides, if `env` is given
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be read or
    /// parsed, or if the environment layer is malformed.
    pub fn load_all(
        settings_path: Option<&Path>,
        env: Option<&EnvironmentConfig>,
    ) -> Result<Vec<ConfigSource>> {
        let mut sources = vec![Self::defaults()];

        if let Some(path) = settings_path {
            if let Some(value) = Self::load_file(path)? {
                sources.push(ConfigSource {
                    origin: LayerOrigin::File(path.to_path_buf()),
                    value,
                });
            } else {
                log::debug!("No settings file at {}", path.display());
            }
        }

        if let Some(env) = env {
            sources.push(ConfigSource {
                origin: LayerOrigin::Environment,
                value: env.to_layer()?,
            });
        }

        Ok(sources)
    }

    /// The built-in defaults layer.
    #[must_use]
    pub fn defaults() -> ConfigSource {
        ConfigSource {
            origin: LayerOrigin::Defaults,
            value: json!({ WORKTREE_KEY: {} }),
        }
    }

    /// Load and parse a JSON settings file.
    ///
    /// Returns `Ok(None)` if the file does not exist. An empty or
    /// whitespace-only file reads as an empty object.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// its top level is not an object.
    pub fn load_file(path: &Path) -> Result<Option<Value>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::InvalidPath {
                    path: path.to_path_buf(),
                    reason: format!("Failed to read settings file: {e}"),
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(Some(json!({})));
        }

        let value: Value = serde_json::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid JSON: {e}"),
        })?;

        if !value.is_object() {
            return Err(Error::Validation {
                field: format!("{}", path.display()),
                message: "Settings file must contain a JSON object".into(),
            });
        }

        Ok(Some(value))
    }
}

/// Default settings file location: `~/.pi/agent/pi-worktrees-settings.json`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_settings_path() -> Result<PathBuf> {
    let home = home::home_dir().ok_or(Error::HomeDirectoryNotFound)?;
    Ok(home.join(".pi").join("agent").join(SETTINGS_FILE_NAME))
}
