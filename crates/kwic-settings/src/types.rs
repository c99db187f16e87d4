//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and `#[serde(default)]`
//! so a partial JSON file only needs the keys it changes.

use serde::{Deserialize, Serialize};

/// Root settings type.
///
/// ```json
/// {
///   "logging": { "level": "info" },
///   "output": { "sort": false }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KwicSettings {
    /// Logging configuration.
    pub logging: LoggingSettings,
    /// Listing output configuration.
    pub output: OutputSettings,
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// How the KWIC listing is printed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputSettings {
    /// Sort shifts alphabetically instead of printing them in generation order.
    pub sort: bool,
    /// Compare words case-sensitively when sorting.
    pub case_sensitive: bool,
    /// Printed between the words of a shift.
    pub separator: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            sort: true,
            case_sensitive: false,
            separator: " ".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
