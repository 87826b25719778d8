//! Settings system for pi-worktrees.
//!
//! This module provides layered settings with support for:
//! - A JSON settings file (`~/.pi/agent/pi-worktrees-settings.json`)
//! - Environment variable overrides (`PI_WORKTREES_*`, `__` for nesting)
//! - Normalization of the legacy flat shape into the nested one
//! - Writing settings back to disk
//!
//! # Settings Precedence
//!
//! Layers are merged with the following precedence (highest to lowest):
//!
//! 1. Environment variables (`PI_WORKTREES_*`)
//! 2. Settings file
//! 3. Built-in defaults (`{"worktree": {}}`)
//!
//! # Examples
//!
//! Opening an isolated store:
//!
//! ```no_run
//! use pi_worktrees::config::{ConfigStore, WorktreeSettings};
//!
//! let mut store = ConfigStore::builder()
//!     .with_settings_path("/tmp/pi/settings.json")
//!     .with_env_vars([("PI_WORKTREES_WORKTREE__ONCREATE", "echo hi")])
//!     .build()
//!     .unwrap();
//!
//! store
//!     .save_worktree_settings(&WorktreeSettings::default().with_parent_dir("/tmp/wt"))
//!     .unwrap();
//!
//! let settings = store.get_worktree_settings();
//! assert_eq!(settings.parent_dir.as_deref(), Some("/tmp/wt"));
//! assert_eq!(settings.on_create.as_deref(), Some("echo hi"));
//! ```
//!
//! Normalizing a raw value:
//!
//! ```
//! use pi_worktrees::config::normalize;
//! use serde_json::json;
//!
//! let config = normalize(&json!({"onCreate": "npm ci", "unknown": true})).unwrap();
//! assert_eq!(config.worktree.on_create.as_deref(), Some("npm ci"));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod normalize;
pub mod persistence;
pub mod schema;
pub mod store;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigStoreBuilder;
pub use environment::{env_prefix, EnvironmentConfig, NESTING_SEPARATOR};
pub use loader::{
    default_settings_path, ConfigLoader, ConfigSource, LayerOrigin, APP_NAME, SETTINGS_FILE_NAME,
};
pub use merger::ConfigMerger;
pub use normalize::{normalize, normalize_settings};
pub use persistence::{render_settings, write_settings_file};
pub use schema::{ResolvedConfig, UnresolvedConfig, WorktreeSettings};
pub use store::ConfigStore;
pub use validator::ConfigValidator;
