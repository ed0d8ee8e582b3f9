//! Runtime configuration
//!
//! Values are resolved in three layers:
//! 1. Built-in defaults (`~/.notr/logs`, 10 lines per `/list`, 24 hour window)
//! 2. `~/.notr/config.toml`, or the file named by `NOTR_CONFIG`
//! 3. `NOTR_LOG_DIR` environment override
//!
//! A missing config file is not an error; a malformed one, or one with a
//! non-positive or unrepresentable `window_hours`, is.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{NotrError, NotrResult};
use crate::query::{DEFAULT_TAIL_COUNT, DEFAULT_WINDOW_HOURS};
use crate::store::StoreConfig;

/// Directory under the user's home holding notr data
pub const APP_DIR: &str = ".notr";

/// Environment variable overriding the log directory
pub const LOG_DIR_ENV: &str = "NOTR_LOG_DIR";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "NOTR_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the monthly log files
    pub log_dir: PathBuf,
    /// Lines shown by a bare `/list`
    pub list_count: usize,
    /// Look-back window for `-l` without `--since`
    pub window_hours: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: app_dir().join("logs"),
            list_count: DEFAULT_TAIL_COUNT,
            window_hours: DEFAULT_WINDOW_HOURS,
        }
    }
}

impl Config {
    /// Resolve configuration from defaults, the config file and the environment
    pub fn load() -> NotrResult<Self> {
        let path = env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path());

        let mut config = Self::load_from(&path)?;
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        config.apply_log_dir_override(env::var(LOG_DIR_ENV).ok(), &current_dir);
        Ok(config)
    }

    /// Read a TOML config file, falling back to defaults if it does not exist
    ///
    /// Keys missing from the file keep their default values.
    pub fn load_from<P: AsRef<Path>>(path: P) -> NotrResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| NotrError::Config(format!("{}: {}", path.display(), e)))?;
        config
            .validate()
            .map_err(|msg| NotrError::Config(format!("{}: {}", path.display(), msg)))?;
        debug!("event=config_loaded file={}", path.display());
        Ok(config)
    }

    /// Check values that would otherwise fail later at query time
    fn validate(&self) -> Result<(), String> {
        if self.window_hours <= 0 || chrono::Duration::try_hours(self.window_hours).is_none() {
            return Err(format!(
                "window_hours must be a positive number of hours, got {}",
                self.window_hours
            ));
        }
        Ok(())
    }

    /// Replace `log_dir` with `value` when set
    ///
    /// Relative paths are resolved against `current_dir`; blank values are ignored.
    pub fn apply_log_dir_override(&mut self, value: Option<String>, current_dir: &Path) {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            return;
        };
        let path = PathBuf::from(value.trim());
        self.log_dir = if path.is_absolute() {
            path
        } else {
            current_dir.join(path)
        };
    }

    /// Storage settings derived from this config
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.log_dir)
    }
}

/// `~/.notr`, or `./.notr` when no home directory can be determined
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// `~/.notr/config.toml`
pub fn default_config_path() -> PathBuf {
    app_dir().join("config.toml")
}
