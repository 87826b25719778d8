//! Environment variable handling for settings overrides.
//!
//! Variables named `<PREFIX><SEGMENT>[__<SEGMENT>...]` are turned into a
//! nested JSON layer. The prefix is derived from the application name, so
//! `PI_WORKTREES_WORKTREE__PARENTDIR` becomes `worktree.parentDir`.

use crate::config::schema::{SETTINGS_KEYS, WORKTREE_KEY};
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::env;

/// Separator between nesting levels in a variable name.
pub const NESTING_SEPARATOR: &str = "__";

/// Top-level keys known to the schema, including the legacy flat fields.
const TOP_LEVEL_KEYS: [&str; 3] = [WORKTREE_KEY, SETTINGS_KEYS[0], SETTINGS_KEYS[1]];

/// Derives the environment prefix for an application name.
///
/// The name is uppercased, hyphens become underscores, and a trailing
/// underscore is appended.
///
/// # Examples
///
/// ```
/// use pi_worktrees::config::env_prefix;
///
/// assert_eq!(env_prefix("pi-worktrees"), "PI_WORKTREES_");
/// ```
#[must_use]
pub fn env_prefix(app_name: &str) -> String {
    format!("{}_", app_name.to_uppercase().replace('-', "_"))
}

/// Source of environment overrides for one settings load.
///
/// By default the process environment is read on every call to
/// [`EnvironmentConfig::to_layer`]; a fixed variable map can be supplied
/// instead for isolated handles.
///
/// # Examples
///
/// ```
/// use pi_worktrees::config::EnvironmentConfig;
///
/// let env = EnvironmentConfig::with_vars(
///     "PI_WORKTREES_",
///     [("PI_WORKTREES_WORKTREE__PARENTDIR", "/other")],
/// );
/// let layer = env.to_layer().unwrap();
/// assert_eq!(layer["worktree"]["parentDir"], "/other");
/// ```
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    prefix: String,
    vars: Option<BTreeMap<String, String>>,
}

impl EnvironmentConfig {
    /// Reads overrides from the process environment.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            vars: None,
        }
    }

    /// Reads overrides from a fixed set of variables instead of the process
    /// environment.
    #[must_use]
    pub fn with_vars<I, K, V>(prefix: impl Into<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix: prefix.into(),
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// The variable name prefix this source matches.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Build the environment layer as a JSON object.
    ///
    /// Only variables whose name starts with the prefix (case-sensitive)
    /// contribute. Path segments are matched case-insensitively against the
    /// schema's field names; unmatched segments keep their spelling.
    ///
    /// # Errors
    ///
    /// Returns a validation error if two variables disagree on whether a
    /// path is a value or a nested object.
    pub fn to_layer(&self) -> Result<Value> {
        let mut layer = Map::new();

        for (name, value) in self.matching_vars() {
            let Some(rest) = name.strip_prefix(&self.prefix) else {
                continue;
            };

            let segments: Vec<&str> = rest.split(NESTING_SEPARATOR).collect();
            if segments.iter().any(|s| s.is_empty()) {
                log::warn!("Ignoring environment variable {name}: empty path segment");
                continue;
            }

            log::debug!("Applying environment override {name}");
            Self::insert_path(&mut layer, &name, &segments, value)?;
        }

        Ok(Value::Object(layer))
    }

    /// Collect prefixed variables in name order.
    fn matching_vars(&self) -> BTreeMap<String, String> {
        let all = match &self.vars {
            Some(vars) => vars.clone(),
            None => env::vars_os()
                .filter_map(|(k, v)| match (k.into_string(), v.into_string()) {
                    (Ok(k), Ok(v)) => Some((k, v)),
                    (Ok(k), Err(_)) => {
                        log::debug!("Skipping non-UTF-8 value of {k}");
                        None
                    }
                    _ => None,
                })
                .collect(),
        };

        all.into_iter()
            .filter(|(k, _)| k.starts_with(&self.prefix))
            .collect()
    }

    /// Insert `value` into `target` under the nested path `segments`.
    fn insert_path(
        target: &mut Map<String, Value>,
        var_name: &str,
        segments: &[&str],
        value: String,
    ) -> Result<()> {
        let mut current = target;
        let mut parent: Option<String> = None;

        for (i, segment) in segments.iter().enumerate() {
            let key = Self::canonical_key(parent.as_deref(), segment);

            if i == segments.len() - 1 {
                if current.get(&key).is_some_and(Value::is_object) {
                    return Err(Self::conflict(var_name, &key));
                }
                current.insert(key, Value::String(value));
                return Ok(());
            }

            let entry = current
                .entry(key.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            current = match entry {
                Value::Object(map) => map,
                _ => return Err(Self::conflict(var_name, &key)),
            };
            parent = Some(key);
        }

        Ok(())
    }

    /// Map a path segment onto the schema's spelling of that field.
    fn canonical_key(parent: Option<&str>, segment: &str) -> String {
        let candidates: &[&str] = match parent {
            None => &TOP_LEVEL_KEYS,
            Some(WORKTREE_KEY) => &SETTINGS_KEYS,
            Some(_) => &[],
        };

        candidates
            .iter()
            .find(|c| c.eq_ignore_ascii_case(segment))
            .map_or_else(|| segment.to_string(), |c| (*c).to_string())
    }

    fn conflict(var_name: &str, key: &str) -> Error {
        Error::validation(
            var_name,
            format!("'{key}' is set both as a value and as a nested object"),
        )
    }
}
