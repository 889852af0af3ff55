//! Core configuration: storage keys, file names and runtime settings.
//!
//! # Invariants
//! - Storage keys are stable; changing one orphans previously saved data.
//! - `CoreConfig` never touches the filesystem; callers create directories.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

pub const CATEGORIES_STORAGE_KEY: &str = "never-forget-categories";
pub const NOTES_STORAGE_KEY: &str = "never-forget-notes";
pub const REMINDERS_STORAGE_KEY: &str = "never-forget-reminders";

pub const DB_FILE_NAME: &str = "never-forget.sqlite3";
const LOG_DIR_NAME: &str = "logs";

pub const DATA_DIR_ENV: &str = "NEVER_FORGET_DATA_DIR";
pub const LOG_LEVEL_ENV: &str = "NEVER_FORGET_LOG_LEVEL";

/// Runtime settings for a process hosting the stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Directory holding the SQLite file and the `logs/` directory.
    pub data_dir: PathBuf,
    pub log_level: String,
}

impl CoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            log_level: default_log_level().to_string(),
        }
    }

    /// Reads `NEVER_FORGET_DATA_DIR` and `NEVER_FORGET_LOG_LEVEL`.
    ///
    /// Unset or blank values fall back to `fallback_dir` and the build-mode
    /// default level.
    pub fn from_env(fallback_dir: &Path) -> Self {
        Self::from_lookup(fallback_dir, |name| std::env::var(name).ok())
    }

    fn from_lookup(fallback_dir: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let data_dir = non_blank(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| fallback_dir.to_path_buf());
        let mut config = Self::new(data_dir);
        if let Some(level) = non_blank(LOG_LEVEL_ENV) {
            config.log_level = level.trim().to_string();
        }
        config
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}
