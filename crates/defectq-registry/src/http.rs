//! HTTP-backed registry provider
//!
//! Talks to the results server's read API:
//! - `GET {base}/v1/runs` — all stored runs as JSON
//! - `GET {base}/v1/runs/{id}/reports` — the reports of one run
//!
//! Transport failures surface as `RegistryError::Connection`; an answering
//! server with an unexpected status or undecodable body surfaces as
//! `RegistryError::MalformedResponse`. Retry policy, if any, belongs to
//! the caller's transport layer, not here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RegistryError;
use crate::models::{ReportRecord, RunId, RunRecord};
use crate::registry_traits::{RegistryResult, RunRegistry};

/// Default server URL when neither `--url` nor `DEFECTQ_URL` is given.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8001";

/// Results-server connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the results server, e.g. `http://localhost:8001`
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: std::env::var("DEFECTQ_URL")
                .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string()),
        }
    }
}

impl ServerConfig {
    /// Create a new config from environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create config for a specific server
    pub fn new(base_url: &str) -> Self {
        ServerConfig {
            base_url: base_url.to_string(),
        }
    }
}

/// Registry provider backed by the results server's HTTP API.
pub struct HttpRunRegistry {
    config: ServerConfig,
    http_client: reqwest::Client,
}

impl HttpRunRegistry {
    /// Create a new provider for the configured server.
    pub fn new(config: ServerConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("defectq/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        HttpRunRegistry {
            config,
            http_client,
        }
    }

    /// Create provider from environment variables
    pub fn from_env() -> Self {
        Self::new(ServerConfig::from_env())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> RegistryResult<T> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| RegistryError::Connection {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::MalformedResponse {
                url: url.to_string(),
                reason: format!("unexpected status {}", status),
            });
        }

        response
            .json()
            .await
            .map_err(|e| RegistryError::MalformedResponse {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl RunRegistry for HttpRunRegistry {
    async fn list_runs(&self) -> RegistryResult<Vec<RunRecord>> {
        let url = self.endpoint("v1/runs");
        debug!(url = %url, "fetching run snapshot");

        let mut runs: Vec<RunRecord> = self.get_json(&url).await?;
        // Snapshot order is part of the contract; do not trust the wire.
        runs.sort_by_key(|run| run.id);
        Ok(runs)
    }

    async fn run_reports(&self, run: &RunId) -> RegistryResult<Vec<ReportRecord>> {
        let url = self.endpoint(&format!("v1/runs/{}/reports", run));
        debug!(url = %url, run_id = %run, "fetching run reports");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| RegistryError::Connection {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::RunNotFound { run_id: *run });
        }
        if !status.is_success() {
            return Err(RegistryError::MalformedResponse {
                url,
                reason: format!("unexpected status {}", status),
            });
        }

        response
            .json()
            .await
            .map_err(|e| RegistryError::MalformedResponse {
                url,
                reason: e.to_string(),
            })
    }
}
