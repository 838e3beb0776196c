//! Configuration file support.
//!
//! Loaded from `.acromatch.toml` in the current directory or
//! `<config dir>/acromatch/config.toml`, falling back to defaults.

use crate::corpus::ScanOptions;
use crate::error::{Error, Result};
use crate::search::{DEFAULT_ACRONYM_CAP, FinderOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name.
pub const CONFIG_FILE_NAME: &str = ".acromatch.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of acronym-only results merged behind name matches.
    pub max_acronym_results: usize,
    /// Run the plain name search alongside acronym matching.
    pub primary_search: bool,
    /// Include dot-files when scanning.
    pub include_hidden: bool,
    /// Only scan files with these extensions; empty scans everything.
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_acronym_results: DEFAULT_ACRONYM_CAP,
            primary_search: true,
            include_hidden: false,
            extensions: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Precedence (highest to lowest):
    /// 1. `.acromatch.toml` in the current directory
    /// 2. `<config dir>/acromatch/config.toml`
    pub fn load() -> Self {
        Self::discover(Self::default_locations())
    }

    pub fn default_locations() -> Vec<PathBuf> {
        let mut locations = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(config_dir) = dirs::config_dir() {
            locations.push(config_dir.join("acromatch").join("config.toml"));
        }
        locations
    }

    /// First loadable config among `locations`, or the defaults.
    ///
    /// Missing files are skipped silently; unreadable or invalid ones are
    /// logged and skipped.
    pub fn discover(locations: impl IntoIterator<Item = PathBuf>) -> Self {
        for path in locations {
            if !path.is_file() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => tracing::warn!("{}", e),
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            include_hidden: self.include_hidden,
            extensions: self.extensions.clone(),
        }
    }

    pub fn finder_options(&self) -> FinderOptions {
        FinderOptions {
            acronym_cap: self.max_acronym_results,
            primary: self.primary_search,
        }
    }
}
