//! Normalization of merged settings into the resolved shape.
//!
//! This is the only place that knows about the legacy flat shape
//! (`parentDir`/`onCreate` at the top level). Dropping legacy support means
//! deleting [`fold_legacy_fields`] and nothing else.

use crate::config::schema::{ResolvedConfig, UnresolvedConfig, WorktreeSettings, WORKTREE_KEY};
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use serde_json::{json, Value};

/// Normalize a raw merged value into a [`ResolvedConfig`].
///
/// Nested `worktree.<key>` values win over legacy top-level ones; keys
/// present in neither place are omitted. Unknown top-level properties are
/// dropped.
///
/// # Errors
///
/// Returns a validation error if a known field has the wrong type, if the
/// `worktree` object carries an unknown key, or if the built result fails
/// the strict resolved check.
///
/// # Examples
///
/// ```
/// use pi_worktrees::config::normalize;
/// use serde_json::json;
///
/// let config = normalize(&json!({"worktree": {"parentDir": "A"}, "parentDir": "B"})).unwrap();
/// assert_eq!(config.worktree.parent_dir.as_deref(), Some("A"));
///
/// let config = normalize(&json!({"parentDir": "B"})).unwrap();
/// assert_eq!(config.worktree.parent_dir.as_deref(), Some("B"));
/// ```
pub fn normalize(value: &Value) -> Result<ResolvedConfig> {
    ConfigValidator::validate_unresolved(value)?;

    let unresolved: UnresolvedConfig = serde_json::from_value(value.clone())
        .map_err(|e| Error::validation("(root)", e.to_string()))?;

    let resolved = ResolvedConfig {
        worktree: fold_legacy_fields(unresolved),
    };

    ConfigValidator::validate_resolved(&serde_json::to_value(&resolved)?)?;
    Ok(resolved)
}

/// Normalize a bare [`WorktreeSettings`] as `{"worktree": settings}`.
///
/// # Errors
///
/// Same as [`normalize`].
pub fn normalize_settings(settings: &WorktreeSettings) -> Result<ResolvedConfig> {
    normalize(&json!({ WORKTREE_KEY: settings }))
}

/// Fold the legacy top-level fields into the nested settings.
fn fold_legacy_fields(config: UnresolvedConfig) -> WorktreeSettings {
    let nested = config.worktree.unwrap_or_default();

    WorktreeSettings {
        parent_dir: nested.parent_dir.or(config.parent_dir),
        on_create: nested.on_create.or(config.on_create),
    }
}
