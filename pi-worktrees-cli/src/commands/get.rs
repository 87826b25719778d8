//! Command to print a single setting.

use crate::error::CliError;
use crate::utils::{open_store, GlobalOptions};
use clap::{Args, ValueEnum};
use std::fmt;

/// Settings addressable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettingKey {
    /// `worktree.parentDir`
    ParentDir,
    /// `worktree.onCreate`
    OnCreate,
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParentDir => write!(f, "parent-dir"),
            Self::OnCreate => write!(f, "on-create"),
        }
    }
}

/// Print one resolved setting.
#[derive(Args)]
pub struct GetCommand {
    /// Setting to print
    #[arg(value_enum, value_name = "KEY")]
    pub key: SettingKey,
}

impl GetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = open_store(global)?;
        let settings = store.get_worktree_settings();

        let value = match self.key {
            SettingKey::ParentDir => settings.parent_dir.as_deref(),
            SettingKey::OnCreate => settings.on_create.as_deref(),
        };

        match value {
            Some(value) => {
                println!("{value}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "Setting '{}' is not set",
                self.key
            ))),
        }
    }
}
