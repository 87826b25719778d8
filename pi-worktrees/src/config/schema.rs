//! Settings schema definitions.
//!
//! This module defines the shapes the settings pass through: the permissive
//! [`UnresolvedConfig`] read from the merged layers, and the strict
//! [`ResolvedConfig`] exposed to the rest of the tool.

use serde::{Deserialize, Serialize};

/// JSON key of the nested worktree settings object.
pub const WORKTREE_KEY: &str = "worktree";

/// JSON key of the parent directory setting.
pub const PARENT_DIR_KEY: &str = "parentDir";

/// JSON key of the post-create command setting.
pub const ON_CREATE_KEY: &str = "onCreate";

/// All keys allowed inside the `worktree` object.
pub const SETTINGS_KEYS: [&str; 2] = [PARENT_DIR_KEY, ON_CREATE_KEY];

/// Settings controlling how working trees are created.
///
/// Both fields are optional; `None` means "use the tool default". Absent
/// fields are omitted when serialized.
///
/// # Examples
///
/// ```
/// use pi_worktrees::config::WorktreeSettings;
///
/// let settings = WorktreeSettings::default().with_parent_dir("/tmp/wt");
/// assert_eq!(settings.parent_dir.as_deref(), Some("/tmp/wt"));
/// assert!(settings.on_create.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct WorktreeSettings {
    /// Base directory under which new working trees are created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_dir: Option<String>,

    /// Shell command template run after a working tree is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_create: Option<String>,
}

impl WorktreeSettings {
    /// Returns a copy with `parent_dir` set.
    #[must_use]
    pub fn with_parent_dir(mut self, dir: impl Into<String>) -> Self {
        self.parent_dir = Some(dir.into());
        self
    }

    /// Returns a copy with `on_create` set.
    #[must_use]
    pub fn with_on_create(mut self, command: impl Into<String>) -> Self {
        self.on_create = Some(command.into());
        self
    }

    /// Whether no setting is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent_dir.is_none() && self.on_create.is_none()
    }
}

/// The normalized configuration snapshot.
///
/// This is the only shape handed to consumers after a load. It never carries
/// unknown properties or the legacy flat fields.
///
/// # Examples
///
/// ```
/// use pi_worktrees::config::{ResolvedConfig, WorktreeSettings};
///
/// let config = ResolvedConfig {
///     worktree: WorktreeSettings::default().with_on_create("npm install"),
/// };
/// let json = serde_json::to_string(&config).unwrap();
/// assert_eq!(json, r#"{"worktree":{"onCreate":"npm install"}}"#);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Worktree creation settings.
    pub worktree: WorktreeSettings,
}

/// The raw merged input before normalization.
///
/// Accepts the legacy flat shape (`parentDir`/`onCreate` at the top level)
/// next to or instead of the nested `worktree` object. Unknown top-level
/// properties are ignored; the nested object stays strict.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedConfig {
    /// Nested settings, if present.
    #[serde(default)]
    pub worktree: Option<WorktreeSettings>,

    /// Legacy flat `parentDir`.
    #[serde(default)]
    pub parent_dir: Option<String>,

    /// Legacy flat `onCreate`.
    #[serde(default)]
    pub on_create: Option<String>,
}
