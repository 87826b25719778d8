//! Layer merging and precedence handling.
//!
//! Layers are raw JSON values. Objects merge key by key; any other value in a
//! higher layer replaces what the lower layer had.

use crate::config::loader::ConfigSource;
use serde_json::{Map, Value};

/// Merges settings layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use pi_worktrees::config::ConfigMerger;
/// use serde_json::json;
///
/// let mut result = json!({"worktree": {"parentDir": "/low", "onCreate": "make"}});
/// ConfigMerger::merge_into(&mut result, &json!({"worktree": {"parentDir": "/high"}}));
/// assert_eq!(result, json!({"worktree": {"parentDir": "/high", "onCreate": "make"}}));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple sources into one value.
    ///
    /// Sources should be ordered from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: &[ConfigSource]) -> Value {
        let mut result = Value::Object(Map::new());

        for source in sources {
            Self::merge_into(&mut result, &source.value);
        }

        result
    }

    /// Merge `source` into `target` (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Object into object: recursive, key by key
    /// - Anything else: source replaces target
    pub fn merge_into(target: &mut Value, source: &Value) {
        match (target, source) {
            (Value::Object(target_map), Value::Object(source_map)) => {
                for (key, source_value) in source_map {
                    match target_map.get_mut(key) {
                        Some(target_value) => Self::merge_into(target_value, source_value),
                        None => {
                            target_map.insert(key.clone(), source_value.clone());
                        }
                    }
                }
            }
            (target, source) => {
                *target = source.clone();
            }
        }
    }
}
