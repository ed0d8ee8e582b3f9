//! Storage path resolution
//!
//! Maps a point in time to the monthly log file that holds it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::NotrResult;

/// File name pattern for monthly log files
pub const LOG_FILE_FORMAT: &str = "%Y_%m.log";

/// Extension of monthly log files
pub const LOG_FILE_EXTENSION: &str = "log";

/// Where the journal lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the `YYYY_MM.log` files
    pub log_dir: PathBuf,
}

impl StoreConfig {
    /// Create config with a custom log directory
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Self {
        Self {
            log_dir: log_dir.as_ref().to_path_buf(),
        }
    }

    /// Get the log directory path
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// File name of the log file for the month containing `at`
    pub fn file_name_for(at: NaiveDateTime) -> String {
        at.format(LOG_FILE_FORMAT).to_string()
    }

    /// Path of the log file for the month containing `at`
    pub fn log_path_for(&self, at: NaiveDateTime) -> PathBuf {
        self.log_dir.join(Self::file_name_for(at))
    }

    /// Create the log directory (and parents) if missing
    pub fn ensure_log_dir(&self) -> NotrResult<()> {
        fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}
