// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build service adapters

mod http;

pub use http::{HttpBuildService, JSON_CONTENT_TYPE};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeBuildService, ServiceCall};

use async_trait::async_trait;
use dscmd_core::{Endpoint, JobMatrix};
use thiserror::Error;

/// Errors from talking to the build service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("error occurred while contacting {url}: {detail}")]
    Transport { url: String, detail: String },

    #[error("server responded with status code {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("malformed response from server: {0}")]
    MalformedResponse(String),

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ServiceError {
    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Adapter for the remote documentation build service
#[async_trait]
pub trait BuildService: Clone + Send + Sync + 'static {
    /// Post the whole job matrix as one JSON array. Succeeds only on status 200.
    async fn submit(&self, endpoint: &Endpoint, jobs: &JobMatrix) -> Result<(), ServiceError>;

    /// Fetch the current queue as raw JSON. Succeeds only on status 200.
    async fn fetch_queue(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ServiceError>;
}
