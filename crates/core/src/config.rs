// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Server configuration file (`~/.dscmd-server.conf`).
//!
//! A plain `key=value` file. Lines starting with `#` and blank lines are
//! ignored, as are lines without an `=`.
//!
//! ```text
//! # Docserv² instance
//! server=docserv.example.com
//! port=8080
//! validtargets=internal,external
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from loading or reading the server configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration key '{key}' is not set")]
    MissingKey { key: &'static str },
}

/// Key/value settings for the Docserv² instance, read once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    entries: HashMap<String, String>,
}

impl ServerConfig {
    pub const SERVER: &'static str = "server";
    pub const PORT: &'static str = "port";
    pub const VALID_TARGETS: &'static str = "validtargets";

    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::Missing {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Ok(Self::parse(&content))
    }

    /// Parse configuration text. Later keys overwrite earlier ones.
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn require(&self, key: &'static str) -> Result<&str, ConfigError> {
        self.get(key).ok_or(ConfigError::MissingKey { key })
    }

    pub fn server(&self) -> Result<&str, ConfigError> {
        self.require(Self::SERVER)
    }

    pub fn port(&self) -> Result<&str, ConfigError> {
        self.require(Self::PORT)
    }

    /// Raw `validtargets` value, unsplit.
    pub fn valid_targets(&self) -> Result<&str, ConfigError> {
        self.require(Self::VALID_TARGETS)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
