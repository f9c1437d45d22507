// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name of the server configuration in the home directory.
pub const CONFIG_FILE_NAME: &str = ".dscmd-server.conf";

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("could not determine home directory")]
    NoHomeDir,
}

// --- Configuration file ---

/// Resolve the configuration file: --config > DSCMD_CONFIG > ~/.dscmd-server.conf
pub fn config_path(flag: Option<&Path>) -> Result<PathBuf, EnvError> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os("DSCMD_CONFIG").filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let home = dirs::home_dir().ok_or(EnvError::NoHomeDir)?;
    Ok(home.join(CONFIG_FILE_NAME))
}

// --- State directory ---

/// Resolve state directory: DSCMD_STATE_DIR > XDG_STATE_HOME/dscmd > ~/.local/state/dscmd
pub fn state_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("DSCMD_STATE_DIR") {
        return Some(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg).join("dscmd"));
    }
    dirs::home_dir().map(|home| home.join(".local/state/dscmd"))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
