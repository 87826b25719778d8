//! Command to validate a settings file.

use crate::error::CliError;
use crate::utils::{settings_path, GlobalOptions};
use clap::Args;
use pi_worktrees::config::{normalize, ConfigLoader, ConfigMerger};
use std::path::PathBuf;

/// Validate a settings file without loading environment overrides.
#[derive(Args)]
pub struct ValidateCommand {
    /// Settings file to validate (defaults to the active settings file)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = match self.file {
            Some(path) => path,
            None => settings_path(global)?,
        };

        // 1. Check file exists
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                path.display()
            )));
        }

        // 2. Parse the file and normalize it over the defaults
        let result = ConfigLoader::load_all(Some(&path), None)
            .and_then(|layers| normalize(&ConfigMerger::merge(&layers)));

        match result {
            Ok(_) => {
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
