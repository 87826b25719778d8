//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{GetCommand, PathCommand, SetCommand, ShowCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and edit pi-worktrees settings.
#[derive(Parser)]
#[command(name = "pi-worktrees")]
#[command(version, about = "Inspect and edit pi-worktrees settings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the settings file location
    #[arg(long, value_name = "PATH", global = true)]
    pub settings_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved settings
    Show(ShowCommand),

    /// Print a single resolved setting
    Get(GetCommand),

    /// Change settings and save them
    Set(SetCommand),

    /// Print the settings file path
    Path(PathCommand),

    /// Validate a settings file
    Validate(ValidateCommand),
}
