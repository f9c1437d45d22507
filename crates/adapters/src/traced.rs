// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::service::{BuildService, ServiceError};
use async_trait::async_trait;
use dscmd_core::{Endpoint, JobMatrix};
use tracing::Instrument;

/// Wrapper that adds tracing to any BuildService
#[derive(Clone)]
pub struct TracedService<S> {
    inner: S,
}

impl<S> TracedService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: BuildService> BuildService for TracedService<S> {
    async fn submit(&self, endpoint: &Endpoint, jobs: &JobMatrix) -> Result<(), ServiceError> {
        async {
            let count = jobs.len();
            let start = std::time::Instant::now();
            let result = self.inner.submit(endpoint, jobs).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(jobs = count, elapsed_ms, "payload accepted"),
                Err(e) => tracing::error!(jobs = count, elapsed_ms, error = %e, "submit failed"),
            }
            result
        }
        .instrument(tracing::info_span!("service.submit", url = %endpoint))
        .await
    }

    async fn fetch_queue(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ServiceError> {
        async {
            let result = self.inner.fetch_queue(endpoint).await;
            match &result {
                Ok(queue) => tracing::debug!(
                    items = queue.as_array().map(Vec::len).unwrap_or(0),
                    "queue fetched"
                ),
                Err(e) => tracing::error!(error = %e, "queue fetch failed"),
            }
            result
        }
        .instrument(tracing::info_span!("service.fetch_queue", url = %endpoint))
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
