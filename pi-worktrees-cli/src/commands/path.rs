//! Command to show the settings file location.

use crate::error::CliError;
use crate::utils::{settings_path, GlobalOptions};
use clap::Args;

/// Print the path of the settings file.
#[derive(Args)]
pub struct PathCommand {}

impl PathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // No load here, so the path is printed even when the file is invalid
        let path = settings_path(global)?;

        println!("{}", path.display());
        Ok(())
    }
}
