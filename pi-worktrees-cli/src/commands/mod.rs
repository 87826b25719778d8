//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `show`: Print the resolved settings
//! - `get`: Print a single setting
//! - `set`: Change settings and save them
//! - `path`: Print the settings file location
//! - `validate`: Validate a settings file

pub mod get;
pub mod path;
pub mod set;
pub mod show;
pub mod validate;

pub use get::{GetCommand, SettingKey};
pub use path::PathCommand;
pub use set::SetCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
