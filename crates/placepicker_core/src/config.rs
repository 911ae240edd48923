//! Runtime configuration resolved from the process environment.
//!
//! # Invariants
//! - Empty or whitespace-only variables count as unset.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Env var overriding the SQLite database file.
pub const ENV_DB_PATH: &str = "PLACEPICKER_DB_PATH";
/// Env var pointing at a JSON catalog replacing the bundled one.
pub const ENV_CATALOG: &str = "PLACEPICKER_CATALOG";
/// Env var selecting the log level.
pub const ENV_LOG_LEVEL: &str = "PLACEPICKER_LOG_LEVEL";
/// Env var enabling file logging into an absolute directory.
pub const ENV_LOG_DIR: &str = "PLACEPICKER_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "placepicker.sqlite3";

/// Host configuration shared by the FFI and CLI entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    pub db_path: PathBuf,
    /// `None` selects `Catalog::builtin()`.
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
    /// `None` leaves file logging disabled.
    pub log_dir: Option<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            catalog_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl PickerConfig {
    /// Reads configuration from `PLACEPICKER_*` variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            db_path: read(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            catalog_path: read(ENV_CATALOG).map(PathBuf::from),
            log_level: read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: read(ENV_LOG_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PickerConfig, ENV_CATALOG, ENV_DB_PATH, ENV_LOG_DIR};
    use std::path::PathBuf;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = PickerConfig::from_lookup(|key| match key {
            ENV_DB_PATH => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn explicit_values_are_trimmed() {
        let config = PickerConfig::from_lookup(|key| match key {
            ENV_DB_PATH => Some(" /data/picker.db ".to_string()),
            ENV_CATALOG => Some("/data/catalog.json".to_string()),
            ENV_LOG_DIR => Some("/var/log/picker".to_string()),
            _ => None,
        });
        assert_eq!(config.db_path, PathBuf::from("/data/picker.db"));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/data/catalog.json")));
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/picker"));
    }
}
