// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Remote fitness API client.
//!
//! Handles:
//! - Activity listing (`GET {base}/activities`)
//! - Heart-rate records per activity (`GET {base}/activities/{id}`)
//! - A per-request time budget; a request that exceeds it is abandoned and
//!   reported as cancelled

use crate::models::activity::{RemoteActivity, RemoteActivityRecord};
use crate::models::heart_rate::RemoteActivityDetails;
use async_trait::async_trait;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

/// Provider of remote activities and their heart-rate records.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    async fn list_activities(&self) -> Result<Vec<RemoteActivity>, RemoteError>;

    async fn activity_details(&self, activity_id: &str)
        -> Result<RemoteActivityDetails, RemoteError>;
}

/// HTTP client for the remote fitness API.
#[derive(Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl RemoteClient {
    /// Create a client rooted at `base_url` (e.g. `https://host/garmin`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generic GET request with JSON response, bounded by the time budget.
    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, RemoteError> {
        with_budget(self.timeout, async {
            let response = self
                .http
                .get(url)
                .send()
                .await
                .map_err(|e| RemoteError::Request(e.to_string()))?;

            self.check_response_json(response).await
        })
        .await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, RemoteError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RemoteSource for RemoteClient {
    async fn list_activities(&self) -> Result<Vec<RemoteActivity>, RemoteError> {
        let url = format!("{}/activities", self.base_url);
        let records: Vec<RemoteActivityRecord> = self.get_json(&url).await?;
        tracing::debug!(count = records.len(), "Fetched remote activities");
        Ok(records.into_iter().map(RemoteActivity::from).collect())
    }

    async fn activity_details(
        &self,
        activity_id: &str,
    ) -> Result<RemoteActivityDetails, RemoteError> {
        let url = format!("{}/activities/{}", self.base_url, activity_id);
        self.get_json(&url).await
    }
}

/// Run `fut`, abandoning it as [`RemoteError::Cancelled`] once `budget` elapses.
pub async fn with_budget<T, F>(budget: Duration, fut: F) -> Result<T, RemoteError>
where
    F: Future<Output = Result<T, RemoteError>>,
{
    tokio::time::timeout(budget, fut)
        .await
        .unwrap_or(Err(RemoteError::Cancelled))
}

/// Errors from the remote API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RemoteError {
    /// The request was abandoned before completing.
    #[error("Request cancelled")]
    Cancelled,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Cancellation means "no remote data", not a failure worth reporting.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RemoteError::Cancelled)
    }
}
