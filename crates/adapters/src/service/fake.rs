// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake build service for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{BuildService, ServiceError};
use async_trait::async_trait;
use dscmd_core::{Endpoint, Job, JobMatrix};
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded build service call
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    Submit { url: String, jobs: Vec<Job> },
    FetchQueue { url: String },
}

#[derive(Debug, Clone)]
enum Scripted {
    Accept,
    Reject { status: u16, body: String },
    Unreachable(String),
}

struct FakeServiceState {
    calls: Vec<ServiceCall>,
    outcome: Scripted,
    queue: serde_json::Value,
}

/// Fake build service for testing
///
/// Accepts everything and reports an empty queue until scripted otherwise.
#[derive(Clone)]
pub struct FakeBuildService {
    inner: Arc<Mutex<FakeServiceState>>,
}

impl Default for FakeBuildService {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeServiceState {
                calls: Vec::new(),
                outcome: Scripted::Accept,
                queue: serde_json::Value::Array(Vec::new()),
            })),
        }
    }
}

impl FakeBuildService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every following request with `status` and `body`.
    pub fn reject_with(&self, status: u16, body: &str) {
        self.inner.lock().outcome = Scripted::Reject {
            status,
            body: body.to_string(),
        };
    }

    /// Fail every following request at the transport level.
    pub fn set_unreachable(&self, detail: &str) {
        self.inner.lock().outcome = Scripted::Unreachable(detail.to_string());
    }

    /// Queue state returned by `fetch_queue`.
    pub fn set_queue(&self, queue: serde_json::Value) {
        self.inner.lock().queue = queue;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.inner.lock().calls.clone()
    }

    fn scripted_error(state: &FakeServiceState, url: &str) -> Option<ServiceError> {
        match &state.outcome {
            Scripted::Accept => None,
            Scripted::Reject { status, body } => Some(ServiceError::Rejected {
                status: *status,
                body: body.clone(),
            }),
            Scripted::Unreachable(detail) => Some(ServiceError::Transport {
                url: url.to_string(),
                detail: detail.clone(),
            }),
        }
    }
}

#[async_trait]
impl BuildService for FakeBuildService {
    async fn submit(&self, endpoint: &Endpoint, jobs: &JobMatrix) -> Result<(), ServiceError> {
        let mut state = self.inner.lock();
        state.calls.push(ServiceCall::Submit {
            url: endpoint.to_string(),
            jobs: jobs.jobs().to_vec(),
        });
        match Self::scripted_error(&state, endpoint.as_str()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn fetch_queue(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ServiceError> {
        let mut state = self.inner.lock();
        state.calls.push(ServiceCall::FetchQueue {
            url: endpoint.to_string(),
        });
        match Self::scripted_error(&state, endpoint.as_str()) {
            Some(err) => Err(err),
            None => Ok(state.queue.clone()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
