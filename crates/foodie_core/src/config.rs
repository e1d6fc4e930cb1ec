//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Resolve database path and logging options for FFI/CLI entry points.
//!
//! # Invariants
//! - Blank environment values fall back to defaults.
//! - Resolution never fails; invalid levels are reported by `init_logging`.

use crate::logging::{default_log_level, init_logging};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "FOODIE_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "FOODIE_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "FOODIE_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "foodie_store.sqlite3";

/// Resolved core configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file backing the key-value slots.
    pub db_path: PathBuf,
    /// Requested log level (`trace|debug|info|warn|error`).
    pub log_level: String,
    /// Log directory; logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(DB_PATH_ENV).map_or(defaults.db_path, PathBuf::from),
            log_level: read(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
            log_dir: read(LOG_DIR_ENV).map(PathBuf::from),
        }
    }

    /// Starts file logging when a log directory is configured.
    ///
    /// Returns `Ok(false)` when `log_dir` is `None` and logging stays off.
    ///
    /// # Errors
    /// - Returns the `init_logging` error for bad levels, relative or
    ///   non-UTF-8 directories, or conflicting re-initialization.
    pub fn init_logging(&self) -> Result<bool, String> {
        let Some(log_dir) = self.log_dir.as_ref() else {
            return Ok(false);
        };
        let log_dir = log_dir
            .to_str()
            .ok_or_else(|| format!("log_dir is not valid UTF-8: `{}`", log_dir.display()))?;
        init_logging(&self.log_level, log_dir)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let vars = HashMap::from([(DB_PATH_ENV, "   "), (LOG_LEVEL_ENV, "")]);
        let config = CoreConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn explicit_values_are_trimmed() {
        let vars = HashMap::from([
            (DB_PATH_ENV, " /data/foodie.sqlite3 "),
            (LOG_LEVEL_ENV, "warn"),
            (LOG_DIR_ENV, "/data/logs"),
        ]);
        let config = CoreConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.db_path, PathBuf::from("/data/foodie.sqlite3"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/data/logs")));
    }

    #[test]
    fn init_logging_is_skipped_without_log_dir() {
        let config = CoreConfig {
            log_level: "not-a-level".to_string(),
            ..CoreConfig::default()
        };
        assert_eq!(config.init_logging(), Ok(false));
    }
}
