//! Settings shape validation.
//!
//! Validation runs on the raw JSON so errors can name the exact field path.
//! The unresolved check is permissive (unknown top-level keys pass), the
//! resolved check is strict.

use crate::config::schema::{SETTINGS_KEYS, WORKTREE_KEY};
use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Field name used when the whole value is at fault.
const ROOT_FIELD: &str = "(root)";

/// Validates raw settings values.
///
/// # Examples
///
/// ```
/// use pi_worktrees::config::ConfigValidator;
/// use serde_json::json;
///
/// ConfigValidator::validate_unresolved(&json!({"parentDir": "/a", "extra": 1})).unwrap();
/// assert!(ConfigValidator::validate_resolved(&json!({"worktree": {}, "extra": 1})).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the merged, not yet normalized value.
    ///
    /// The value must be an object. `worktree`, if present and not null, must
    /// be an object holding only string `parentDir`/`onCreate` entries. The
    /// legacy top-level `parentDir`/`onCreate` must be strings. Other
    /// top-level keys are ignored. Nulls count as absent.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate_unresolved(value: &Value) -> Result<()> {
        let root = Self::expect_object(ROOT_FIELD, value)?;

        if let Some(worktree) = root.get(WORKTREE_KEY) {
            if !worktree.is_null() {
                Self::validate_settings(worktree, true)?;
            }
        }

        for key in SETTINGS_KEYS {
            if let Some(v) = root.get(key) {
                Self::validate_string(key, v, true)?;
            }
        }

        Ok(())
    }

    /// Validate a normalized value against the strict resolved shape.
    ///
    /// The value must be an object with exactly one key, `worktree`, whose
    /// entries are string `parentDir`/`onCreate` values. Nulls are rejected.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate_resolved(value: &Value) -> Result<()> {
        let root = Self::expect_object(ROOT_FIELD, value)?;

        if let Some(key) = root.keys().find(|k| k.as_str() != WORKTREE_KEY) {
            return Err(Error::validation(key.as_str(), "Unexpected property"));
        }

        let worktree = root
            .get(WORKTREE_KEY)
            .ok_or_else(|| Error::validation(WORKTREE_KEY, "Required property is missing"))?;

        Self::validate_settings(worktree, false)
    }

    /// Validate the body of a `worktree` object.
    fn validate_settings(value: &Value, allow_null: bool) -> Result<()> {
        let settings = Self::expect_object(WORKTREE_KEY, value)?;

        for (key, v) in settings {
            let field = format!("{WORKTREE_KEY}.{key}");
            if !SETTINGS_KEYS.contains(&key.as_str()) {
                return Err(Error::validation(field, "Unexpected property"));
            }
            Self::validate_string(&field, v, allow_null)?;
        }

        Ok(())
    }

    fn validate_string(field: &str, value: &Value, allow_null: bool) -> Result<()> {
        match value {
            Value::String(_) => Ok(()),
            Value::Null if allow_null => Ok(()),
            other => Err(Error::validation(
                field,
                format!("Expected a string, found {}", Self::type_name(other)),
            )),
        }
    }

    fn expect_object<'a>(field: &str, value: &'a Value) -> Result<&'a Map<String, Value>> {
        value.as_object().ok_or_else(|| {
            Error::validation(
                field,
                format!("Expected an object, found {}", Self::type_name(value)),
            )
        })
    }

    fn type_name(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}
