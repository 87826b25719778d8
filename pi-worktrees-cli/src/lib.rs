//! Library exports for pi-worktrees-cli.
//!
//! This module exports the CLI structure so integration tooling can inspect
//! the command definitions.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
