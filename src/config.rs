//! Configuration file handling

use crate::error::{KeydiffError, Result};
use crate::reader::parse_delimiter;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".keydiff.json";

/// Default report file name
pub const DEFAULT_OUTPUT: &str = "diff.csv";

/// Persistent defaults for diff runs; command-line flags take precedence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeydiffConfig {
    pub version: String,
    pub created: Option<DateTime<Utc>>,
    pub delimiter: String,
    pub output: PathBuf,
    pub key_columns: Vec<String>,
    /// File names skipped by discovery
    pub exclude_files: Vec<String>,
}

impl Default for KeydiffConfig {
    fn default() -> Self {
        Self {
            version: crate::FORMAT_VERSION.to_string(),
            created: None,
            delimiter: ",".to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            key_columns: Vec::new(),
            exclude_files: vec![DEFAULT_OUTPUT.to_string(), "combined.csv".to_string()],
        }
    }
}

impl KeydiffConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration: an explicit path must exist, otherwise the
    /// default file in `dir` is used when present
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(KeydiffError::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Self::load(path);
        }

        let default_path = dir.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            log::debug!("Using config file {}", default_path.display());
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the configuration; existing files are kept unless forced.
    /// Returns whether a file was written.
    pub fn write(&self, path: &Path, force: bool) -> Result<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(true)
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        parse_delimiter(&self.delimiter)
    }

    fn validate(&self) -> Result<()> {
        parse_delimiter(&self.delimiter).map_err(|_| {
            KeydiffError::config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ))
        })?;
        if self.output.as_os_str().is_empty() {
            return Err(KeydiffError::config("output path must not be empty"));
        }
        Ok(())
    }
}
