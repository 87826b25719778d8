#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pi-worktrees
//!
//! Settings loader for the pi-worktrees working-tree manager.
//!
//! Settings come from three layers (environment variables over a JSON
//! settings file over built-in defaults), are normalized into one strict
//! shape, and are held by an owned [`ConfigStore`] that can read, save and
//! reload them.
//!
//! ## Core Types
//!
//! - [`ConfigStore`] and [`ConfigStoreBuilder`]: the settings handle
//! - [`ResolvedConfig`] and [`WorktreeSettings`]: the normalized snapshot
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pi_worktrees::config::normalize;
//! use serde_json::json;
//!
//! // The legacy flat shape is folded into the nested one
//! let config = normalize(&json!({"parentDir": "/srv/trees"})).unwrap();
//! assert_eq!(config.worktree.parent_dir.as_deref(), Some("/srv/trees"));
//! ```

pub mod config;
pub mod error;
pub mod logging;

// Re-export key types at crate root for convenience
pub use config::{ConfigStore, ConfigStoreBuilder, ResolvedConfig, WorktreeSettings};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
