//! Property-based tests for the settings system.

use super::merger::ConfigMerger;
use super::normalize::{normalize, normalize_settings};
use super::schema::WorktreeSettings;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// Arbitrary setting strings, including empty and non-ASCII ones
fn setting_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("\\PC{0,30}")
}

fn settings_strategy() -> impl Strategy<Value = WorktreeSettings> {
    (setting_strategy(), setting_strategy())
        .prop_map(|(parent_dir, on_create)| WorktreeSettings {
            parent_dir,
            on_create,
        })
}

fn object_with(parent_dir: &Option<String>, on_create: &Option<String>) -> Value {
    let mut map = Map::new();
    if let Some(v) = parent_dir {
        map.insert("parentDir".to_string(), json!(v));
    }
    if let Some(v) = on_create {
        map.insert("onCreate".to_string(), json!(v));
    }
    Value::Object(map)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Nested settings pass through normalization unchanged
    #[test]
    fn normalize_nested_is_identity(settings in settings_strategy()) {
        let config = normalize(&json!({"worktree": settings})).unwrap();
        prop_assert_eq!(&config.worktree, &settings);
        prop_assert_eq!(normalize_settings(&settings).unwrap(), config);
    }

    // Per key: nested value if present, else flat value, else absent
    #[test]
    fn normalize_nested_wins_per_key(
        nested_parent in setting_strategy(),
        nested_create in setting_strategy(),
        flat_parent in setting_strategy(),
        flat_create in setting_strategy(),
    ) {
        let mut raw = object_with(&flat_parent, &flat_create);
        raw["worktree"] = object_with(&nested_parent, &nested_create);

        let config = normalize(&raw).unwrap();
        prop_assert_eq!(config.worktree.parent_dir, nested_parent.or(flat_parent));
        prop_assert_eq!(config.worktree.on_create, nested_create.or(flat_create));
    }

    // Normalized output never carries legacy or unknown keys
    #[test]
    fn normalize_output_is_strict(
        settings in settings_strategy(),
        extra_key in "[a-z]{1,10}",
        extra_value in any::<i64>(),
    ) {
        if extra_key == "worktree" {
            return Ok(());
        }
        let mut raw = json!({"worktree": settings});
        raw[extra_key.as_str()] = json!(extra_value);

        let value = serde_json::to_value(normalize(&raw).unwrap()).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        prop_assert_eq!(keys, vec!["worktree".to_string()]);
    }

    // Normalization is idempotent
    #[test]
    fn normalize_idempotent(
        flat_parent in setting_strategy(),
        flat_create in setting_strategy(),
    ) {
        let once = normalize(&object_with(&flat_parent, &flat_create)).unwrap();
        let twice = normalize(&serde_json::to_value(&once).unwrap()).unwrap();
        prop_assert_eq!(once, twice);
    }

    // A higher layer's string always wins after merging
    #[test]
    fn merge_higher_precedence_wins(
        low in settings_strategy(),
        high in settings_strategy(),
    ) {
        let mut merged = json!({"worktree": low.clone()});
        ConfigMerger::merge_into(&mut merged, &json!({"worktree": high.clone()}));

        let config = normalize(&merged).unwrap();
        prop_assert_eq!(config.worktree.parent_dir, high.parent_dir.or(low.parent_dir));
        prop_assert_eq!(config.worktree.on_create, high.on_create.or(low.on_create));
    }
}
