//! # Configuration
//!
//! Roster settings are loaded with [`confique`] from a TOML file and the
//! environment.
//!
//! ## Resolution Order
//!
//! 1. **Command line**: applied by the CLI on top of the loaded config.
//! 2. **Environment variables**: `ROSTER_DATA_FILE`, `ROSTER_SORT_ALGORITHM`,
//!    `ROSTER_SEARCH_ALGORITHM`.
//! 3. **Config file**: `roster.toml` in the platform config directory (via the
//!    `directories` crate), or an explicit path.
//! 4. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `<data dir>/students.json` | Path of the JSON record file |
//! | `default_sort_algorithm` | `merge` | Used by `sort` when none is given |
//! | `default_search_algorithm` | `linear` | Used by `search` when none is given |

use crate::algo::{SearchAlgorithm, SortAlgorithm};
use crate::error::{Result, RosterError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "roster.toml";
pub const DATA_FILE_NAME: &str = "students.json";

/// Configuration for roster, stored in `roster.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Path of the JSON record file.
    #[config(env = "ROSTER_DATA_FILE")]
    pub data_file: Option<String>,

    /// Sort algorithm used when none is given (bubble, merge, shell).
    #[config(env = "ROSTER_SORT_ALGORITHM", default = "merge")]
    pub default_sort_algorithm: String,

    /// Search algorithm used when none is given (linear, exact, binary).
    #[config(env = "ROSTER_SEARCH_ALGORITHM", default = "linear")]
    pub default_search_algorithm: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            default_sort_algorithm: "merge".to_string(),
            default_search_algorithm: "linear".to_string(),
        }
    }
}

impl RosterConfig {
    /// Loads env over `file` over defaults. A missing file is skipped.
    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        let mut builder = RosterConfig::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| RosterError::Config(e.to_string()))
    }

    /// Loads env over the platform `roster.toml` over defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path().as_deref())
    }

    pub fn sort_algorithm(&self) -> Result<SortAlgorithm> {
        self.default_sort_algorithm
            .parse()
            .map_err(|e: RosterError| RosterError::Config(format!("default_sort_algorithm: {}", e)))
    }

    pub fn search_algorithm(&self) -> Result<SearchAlgorithm> {
        self.default_search_algorithm
            .parse()
            .map_err(|e: RosterError| {
                RosterError::Config(format!("default_search_algorithm: {}", e))
            })
    }

    /// The configured data file, or the platform default.
    pub fn data_path(&self) -> PathBuf {
        match &self.data_file {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
            _ => default_data_path(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "roster")
}

/// `roster.toml` in the platform config directory, if one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// `students.json` in the platform data directory, else in the working directory.
pub fn default_data_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join(DATA_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
}
