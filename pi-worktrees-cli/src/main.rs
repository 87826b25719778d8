//! Main entry point for the pi-worktrees settings CLI.
//!
//! It provides commands for inspecting and editing the settings file:
//! - `show`: Print the resolved settings
//! - `get`: Print a single setting
//! - `set`: Change settings and save them
//! - `path`: Print the settings file location
//! - `validate`: Validate a settings file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = pi_worktrees::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Failed to install logger: {e}");
    }

    let global = GlobalOptions {
        settings_file: cli.settings_file,
    };

    let result = match cli.command {
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::Set(cmd) => cmd.execute(&global),
        cli::Command::Path(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
