//! Writing the settings file.
//!
//! The file is written to a temporary file in the target directory and then
//! renamed over the destination, so readers never see a half-written file.

use crate::config::schema::ResolvedConfig;
use crate::error::{Error, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Render a config the way it is stored on disk: pretty JSON with a
/// two-space indent and a trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
///
/// ```
/// use pi_worktrees::config::{render_settings, ResolvedConfig, WorktreeSettings};
///
/// let config = ResolvedConfig {
///     worktree: WorktreeSettings::default().with_parent_dir("/tmp/wt"),
/// };
/// assert_eq!(
///     render_settings(&config).unwrap(),
///     "{\n  \"worktree\": {\n    \"parentDir\": \"/tmp/wt\"\n  }\n}\n"
/// );
/// ```
pub fn render_settings(config: &ResolvedConfig) -> Result<String> {
    let mut contents = serde_json::to_string_pretty(config)?;
    contents.push('\n');
    Ok(contents)
}

/// Write `config` to `path`, creating missing parent directories.
///
/// A symlinked settings file is followed, so the link's target receives the
/// new content. An existing file keeps its permissions.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created or the file
/// cannot be written or moved into place.
pub fn write_settings_file(path: &Path, config: &ResolvedConfig) -> Result<()> {
    let contents = render_settings(config)?;
    let target = resolve_target(path)?;

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !dir.exists() {
        log::debug!("Creating settings directory {}", dir.display());
        fs::create_dir_all(dir)?;
    }

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    if let Ok(metadata) = fs::metadata(&target) {
        tmp.as_file().set_permissions(metadata.permissions())?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(&target).map_err(|e| Error::Io(e.error))?;

    log::debug!("Wrote settings to {}", target.display());
    Ok(())
}

/// The file a write to `path` should replace.
///
/// Symlinks are resolved; a path that does not exist yet is used as is.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(Error::Io(e)),
    }
}
