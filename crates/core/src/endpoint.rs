// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Destination URL for a request to the build service.

use std::fmt;

use crate::config::{ConfigError, ServerConfig};
use crate::operation::Operation;

/// Path appended for metadata rebuilds when the scheme was added here.
pub const METADATA_PATH: &str = "/metadata";

const DEFAULT_SCHEME: &str = "http://";

/// A composed build service URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    /// Join `server` and `port`, defaulting the scheme to `http://`.
    ///
    /// `/metadata` is appended for [`Operation::Metadata`] only in the branch
    /// that adds the scheme. A server value that already carries
    /// `http://` or `https://` is used as-is for every operation.
    pub fn compose(server: &str, port: &str, operation: Operation) -> Self {
        let mut url = format!("{}:{}", server, port);
        if !has_scheme(&url) {
            url = format!("{}{}", DEFAULT_SCHEME, url);
            if operation == Operation::Metadata {
                url.push_str(METADATA_PATH);
            }
        }
        Self(url)
    }

    /// Compose from the `server` and `port` configuration keys.
    pub fn from_config(config: &ServerConfig, operation: Operation) -> Result<Self, ConfigError> {
        Ok(Self::compose(config.server()?, config.port()?, operation))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn has_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "endpoint_tests.rs"]
mod tests;
