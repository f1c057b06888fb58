// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is read from `config.toml` in the platform config
//! directory (e.g. `~/.config/tsk/config.toml`), or from `--config <path>`:
//!
//! ```toml
//! database = "~/notes/tasks.db"   # default: <data dir>/tsk/tasks.db
//! bulk_threshold = 10             # default: 4
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::args::ContextConfig;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "tsk";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "tasks.db";

/// User configuration stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database location. Relative paths resolve against the config file's directory.
    #[serde(default)]
    pub database: Option<String>,
    /// Number of matched tasks at which mutations ask for confirmation.
    #[serde(default)]
    pub bulk_threshold: Option<usize>,
    /// Directory the config was loaded from.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from an explicit file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the default file if it exists.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::load(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    /// Builds the parse configuration, letting a command-line value win.
    pub fn context_config(&self, bulk_override: Option<usize>) -> ContextConfig {
        let mut config = ContextConfig::default();
        if let Some(threshold) = bulk_override.or(self.bulk_threshold) {
            config.bulk_threshold = threshold;
        }
        config
    }

    /// Resolves the database path.
    ///
    /// Precedence: `env_override` (from `TSK_DB`), the `database` setting,
    /// then `<data dir>/tsk/tasks.db`.
    pub fn db_path(&self, env_override: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = env_override {
            return Ok(path);
        }

        if let Some(database) = &self.database {
            let expanded = expand_home(database);
            if expanded.is_absolute() {
                return Ok(expanded);
            }
            return Ok(match &self.base_dir {
                Some(base) => base.join(expanded),
                None => expanded,
            });
        }

        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(DB_FILE_NAME))
            .ok_or_else(|| Error::Config("cannot determine data directory".to_string()))
    }
}

/// Default config file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
