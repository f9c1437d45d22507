// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP build service adapter

use async_trait::async_trait;
use dscmd_core::{Endpoint, JobMatrix};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

use super::{BuildService, ServiceError};

/// Content type of job matrix submissions.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Talks to a Docserv² instance over HTTP.
///
/// Uses the transport's default timeouts and never retries.
#[derive(Clone, Default)]
pub struct HttpBuildService {
    client: Client,
}

impl HttpBuildService {
    pub fn new() -> Self {
        Self::default()
    }
}

fn transport(endpoint: &Endpoint, err: reqwest::Error) -> ServiceError {
    ServiceError::Transport {
        url: endpoint.to_string(),
        detail: err.to_string(),
    }
}

async fn rejected(status: StatusCode, response: reqwest::Response) -> ServiceError {
    let body = response.text().await.unwrap_or_default();
    ServiceError::Rejected {
        status: status.as_u16(),
        body,
    }
}

#[async_trait]
impl BuildService for HttpBuildService {
    async fn submit(&self, endpoint: &Endpoint, jobs: &JobMatrix) -> Result<(), ServiceError> {
        let body = jobs.to_json()?;
        let response = self
            .client
            .post(endpoint.as_str())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| transport(endpoint, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(rejected(status, response).await);
        }
        Ok(())
    }

    async fn fetch_queue(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ServiceError> {
        let response = self
            .client
            .get(endpoint.as_str())
            .send()
            .await
            .map_err(|e| transport(endpoint, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(rejected(status, response).await);
        }
        let text = response.text().await.map_err(|e| transport(endpoint, e))?;
        serde_json::from_str(&text).map_err(|e| ServiceError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
