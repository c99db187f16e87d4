//! # kwic-settings
//!
//! Configuration with layered sources for the KWIC index tools.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`KwicSettings::default()`]
//! 2. **User file** — `~/.kwic/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `KWIC_*` overrides (highest priority)

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    apply_env_overrides, apply_overrides, deep_merge, load_settings, load_settings_from_path,
    settings_path,
};
pub use types::{KwicSettings, LoggingSettings, OutputSettings};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
