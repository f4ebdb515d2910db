//! TRIAS HTTP client.
//!
//! One request, one synchronous round trip: serialize, POST, read the body.
//! No retry, no backoff, no caching; callers own that policy.

use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use crate::error::TriasError;
use crate::request::{StopEventRequest, TIMESTAMP_FORMAT};
use crate::schema::{self, TriasResponse};

/// Production endpoint of the Swiss national TRIAS 2020 service.
const DEFAULT_ENDPOINT: &str = "https://api.opentransportdata.swiss/trias2020";

/// Configuration for the TRIAS client.
#[derive(Debug, Clone)]
pub struct TriasConfig {
    /// API key, sent verbatim in the `Authorization` header
    pub api_key: String,
    /// Endpoint URL (defaults to the production TRIAS 2020 service)
    pub endpoint: String,
    /// Request deadline. `None` (the default) leaves the transport's own
    /// policy in charge; callers wanting a deadline set one here or impose
    /// it externally.
    pub timeout: Option<Duration>,
}

impl TriasConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }

    /// Set a custom endpoint URL (for testing).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set a request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Client for the TRIAS stop-event service.
///
/// Cheap to clone and safe to share across tasks; it holds no mutable state
/// beyond the connection pool inside `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct TriasClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl TriasClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TriasConfig) -> Result<Self, TriasError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(TriasError::RequestConstruction)?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
            api_key: config.api_key,
        })
    }

    /// Send a stop-event request and return the raw response bytes.
    ///
    /// The request timestamp is overwritten with the current wall-clock
    /// time: whatever was set at construction is informational, the
    /// transmission timestamp is what the protocol field carries. A single
    /// attempt, no retries.
    pub async fn fetch_raw(&self, request: &StopEventRequest) -> Result<Vec<u8>, TriasError> {
        let mut request = request.clone();
        request.timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        debug!(
            endpoint = %self.endpoint,
            stop_point_ref = %request.stop_point_ref,
            "sending TRIAS stop event request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "text/XML")
            .header("Authorization", &self.api_key)
            .body(request.to_xml())
            .send()
            .await
            .map_err(TriasError::Transport)?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(TriasError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TriasError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(TriasError::ResponseRead)?;

        Ok(bytes.to_vec())
    }

    /// Send a stop-event request and parse the response.
    ///
    /// Convenience over [`fetch_raw`](Self::fetch_raw) +
    /// [`schema::parse`]. Note that a successful return can still carry a
    /// service-level [`ErrorMessage`](crate::schema::ErrorMessage) in the
    /// payload.
    pub async fn fetch_stop_events(
        &self,
        request: &StopEventRequest,
    ) -> Result<TriasResponse, TriasError> {
        let bytes = self.fetch_raw(request).await?;
        schema::parse(&bytes)
    }
}
