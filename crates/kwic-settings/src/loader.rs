//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`KwicSettings::default()`]
//! 2. If `~/.kwic/settings.json` exists, deep-merge user values over defaults
//! 3. Apply environment variable overrides (highest priority)
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::{Result, SettingsError};
use crate::types::KwicSettings;

/// Resolve the path to the settings file (`~/.kwic/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".kwic").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<KwicSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// If the file does not exist, returns defaults. If the file contains
/// invalid JSON, returns an error.
pub fn load_settings_from_path(path: &Path) -> Result<KwicSettings> {
    let defaults = serde_json::to_value(KwicSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let user: Value = serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    let mut settings: KwicSettings = serde_json::from_value(merged)?;
    apply_env_overrides(&mut settings);
    validate(&settings)?;
    Ok(settings)
}

/// Recursive deep merge of two JSON values.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply `KWIC_*` environment variable overrides to loaded settings.
pub fn apply_env_overrides(settings: &mut KwicSettings) {
    apply_overrides(settings, |name| std::env::var(name).ok());
}

/// Apply overrides read through `lookup`.
///
/// Empty strings are treated as unset. Booleans accept
/// `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off`; anything else is
/// ignored with a warning.
pub fn apply_overrides<F>(settings: &mut KwicSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let read_string = |name: &str| lookup(name).filter(|v| !v.is_empty());
    let read_bool = |name: &str| {
        let val = read_string(name)?;
        let result = parse_bool(&val);
        if result.is_none() {
            tracing::warn!(key = name, value = %val, "invalid boolean env var, ignoring");
        }
        result
    };

    if let Some(v) = read_string("KWIC_LOG_LEVEL") {
        settings.logging.level = v;
    }
    if let Some(v) = read_bool("KWIC_SORT") {
        settings.output.sort = v;
    }
    if let Some(v) = read_bool("KWIC_CASE_SENSITIVE") {
        settings.output.case_sensitive = v;
    }
    if let Some(v) = read_string("KWIC_SEPARATOR") {
        settings.output.separator = v;
    }
}

/// Parse a boolean env var value.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// One shift is printed per line, so the separator may not break lines.
fn validate(settings: &KwicSettings) -> Result<()> {
    if settings.output.separator.contains(['\n', '\r']) {
        return Err(SettingsError::InvalidValue {
            key: "output.separator",
            reason: "must not contain line breaks",
        });
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    // ── deep_merge ──────────────────────────────────────────────────

    #[test]
    fn merge_nested_override() {
        let target = serde_json::json!({"output": {"sort": true, "separator": " "}});
        let source = serde_json::json!({"output": {"sort": false}});
        let merged = deep_merge(target, source);
        assert_eq!(merged["output"]["sort"], false);
        assert_eq!(merged["output"]["separator"], " ");
    }

    #[test]
    fn merge_null_preserves_target() {
        let target = serde_json::json!({"a": 1, "b": 2});
        let source = serde_json::json!({"a": null});
        let merged = deep_merge(target, source);
        assert_eq!(merged["a"], 1);
        assert_eq!(merged["b"], 2);
    }

    #[test]
    fn merge_array_replace() {
        let target = serde_json::json!({"items": [1, 2, 3]});
        let source = serde_json::json!({"items": [4]});
        assert_eq!(deep_merge(target, source)["items"], serde_json::json!([4]));
    }

    // ── overrides ───────────────────────────────────────────────────

    #[test]
    fn overrides_apply() {
        let mut settings = KwicSettings::default();
        apply_overrides(
            &mut settings,
            lookup(&[
                ("KWIC_LOG_LEVEL", "debug"),
                ("KWIC_SORT", "off"),
                ("KWIC_CASE_SENSITIVE", "YES"),
                ("KWIC_SEPARATOR", " | "),
            ]),
        );
        assert_eq!(settings.logging.level, "debug");
        assert!(!settings.output.sort);
        assert!(settings.output.case_sensitive);
        assert_eq!(settings.output.separator, " | ");
    }

    #[test]
    fn invalid_and_empty_overrides_are_ignored() {
        let mut settings = KwicSettings::default();
        apply_overrides(
            &mut settings,
            lookup(&[("KWIC_SORT", "maybe"), ("KWIC_LOG_LEVEL", "")]),
        );
        assert_eq!(settings, KwicSettings::default());
    }

    #[test]
    fn parse_bool_variants() {
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("On"), Some(true));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool("2"), None);
    }

    // ── file loading ────────────────────────────────────────────────

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from_path(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings.output, KwicSettings::default().output);
    }

    #[test]
    fn file_values_merge_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"output": {{"separator": "  "}}}}"#).unwrap();
        let settings = load_settings_from_path(file.path()).unwrap();
        assert_eq!(settings.output.separator, "  ");
        assert!(settings.output.sort);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert_matches!(
            load_settings_from_path(file.path()),
            Err(SettingsError::Parse { path, .. }) if path == file.path()
        );
    }

    #[test]
    fn line_break_separator_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"output": {{"separator": "\n"}}}}"#).unwrap();
        assert_matches!(
            load_settings_from_path(file.path()),
            Err(SettingsError::InvalidValue { key: "output.separator", .. })
        );
    }

    #[test]
    fn wrongly_typed_value_is_a_shape_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"output": {{"sort": "yes"}}}}"#).unwrap();
        assert_matches!(
            load_settings_from_path(file.path()),
            Err(SettingsError::Shape(_))
        );
    }

    #[test]
    fn unreadable_settings_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(
            load_settings_from_path(dir.path()),
            Err(SettingsError::Read { path, .. }) if path == dir.path()
        );
    }
}
