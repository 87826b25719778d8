//! Command to change settings and save them.

use crate::error::CliError;
use crate::utils::{format_config, open_store, settings_path, GlobalOptions};
use clap::Args;
use pi_worktrees::config::{
    normalize, normalize_settings, write_settings_file, ConfigLoader, ConfigMerger,
};
use pi_worktrees::WorktreeSettings;
use std::path::Path;

/// Change worktree settings and write them to the settings file.
///
/// Changes apply on top of what the file currently holds; environment
/// overrides are never written back. A file that fails validation is
/// replaced by the given changes alone.
#[derive(Args)]
pub struct SetCommand {
    /// Base directory for new working trees
    #[arg(long, value_name = "DIR", conflicts_with = "unset_parent_dir")]
    pub parent_dir: Option<String>,

    /// Command run after a working tree is created
    #[arg(long, value_name = "COMMAND", conflicts_with = "unset_on_create")]
    pub on_create: Option<String>,

    /// Remove the parent directory setting
    #[arg(long)]
    pub unset_parent_dir: bool,

    /// Remove the post-create command setting
    #[arg(long)]
    pub unset_on_create: bool,
}

impl SetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.parent_dir.is_none()
            && self.on_create.is_none()
            && !self.unset_parent_dir
            && !self.unset_on_create
        {
            return Err(CliError::InvalidArguments(
                "nothing to change (use --parent-dir, --on-create, --unset-parent-dir or --unset-on-create)"
                    .to_string(),
            ));
        }

        let path = settings_path(global)?;
        let mut settings = Self::current_file_settings(&path)?;

        if let Some(dir) = self.parent_dir {
            settings.parent_dir = Some(dir);
        } else if self.unset_parent_dir {
            settings.parent_dir = None;
        }

        if let Some(command) = self.on_create {
            settings.on_create = Some(command);
        } else if self.unset_on_create {
            settings.on_create = None;
        }

        write_settings_file(&path, &normalize_settings(&settings)?)?;
        log::info!("Saved settings to {}", path.display());

        // Environment overrides are reported, never written
        let resolved = match open_store(global) {
            Ok(store) => store.config().clone(),
            Err(e) => {
                log::warn!("Environment overrides not applied: {e}");
                normalize_settings(&settings)?
            }
        };

        println!("{}", format_config(&resolved)?);
        Ok(())
    }

    /// Settings the file holds now, or empty ones if the file is invalid.
    fn current_file_settings(path: &Path) -> Result<WorktreeSettings, CliError> {
        let loaded = ConfigLoader::load_all(Some(path), None)
            .and_then(|layers| normalize(&ConfigMerger::merge(&layers)));

        match loaded {
            Ok(config) => Ok(config.worktree),
            Err(e) if e.is_validation() => {
                log::warn!("Replacing invalid settings in {}: {e}", path.display());
                Ok(WorktreeSettings::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}
