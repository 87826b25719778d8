//! Command to show the resolved settings.

use crate::error::CliError;
use crate::utils::{format_config, open_store, GlobalOptions};
use clap::Args;

/// Print the resolved settings as JSON.
#[derive(Args)]
pub struct ShowCommand {
    /// Also print every layer the settings were merged from (to stderr)
    #[arg(long)]
    pub layers: bool,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = open_store(global)?;

        if self.layers {
            for layer in store.layers() {
                let value = serde_json::to_string(&layer.value)
                    .map_err(|e| CliError::Library(e.into()))?;
                eprintln!("{}: {value}", layer.origin);
            }
        }

        println!("{}", format_config(store.config())?);
        Ok(())
    }
}
