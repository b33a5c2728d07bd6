//! # Search Service HTTP Client
//!
//! Wrapper around the Search Service endpoints used by the CLI: step mode
//! (`/search_sse`, the full event stream plus outcome) and direct mode
//! (`/process_graph`, outcome only).

use pathlens_core::{Outcome, SearchRequest, StepReply, StepResponse};
use serde_json::Value;

/// Errors from the HTTP client layer.
#[derive(Debug)]
pub enum ClientError {
    /// Cannot reach the Search Service.
    ConnectionFailed(String),
    /// 429 Too Many Requests.
    RateLimited,
    /// The service rejected the request (bad graph, unknown algorithm).
    Rejected(String),
    /// Server returned a 5xx error.
    ServerError(u16, String),
    /// Failed to parse response body.
    ParseError(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConnectionFailed(url) => write!(f, "Cannot connect to search service at {url}"),
            Self::RateLimited => write!(f, "Rate limited: too many requests"),
            Self::Rejected(msg) => write!(f, "Request rejected: {msg}"),
            Self::ServerError(status, msg) => write!(f, "Server error ({status}): {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// HTTP client that wraps calls to the Search Service.
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Create a new client pointing at the given service URL.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Send a POST and handle connection errors.
    async fn post(
        &self,
        path: &str,
        body: &SearchRequest,
    ) -> Result<reqwest::Response, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed(format!("{}: {e}", self.base_url)))
    }

    /// Handle HTTP status codes common to both endpoints, returning the body.
    async fn handle_status(&self, resp: reqwest::Response) -> Result<String, ClientError> {
        let status = resp.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ClientError::RateLimited);
        }
        if status == reqwest::StatusCode::BAD_REQUEST {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Rejected(extract_error(&body)));
        }
        if status.is_server_error() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::ServerError(status.as_u16(), body));
        }
        resp.text()
            .await
            .map_err(|e| ClientError::ParseError(e.to_string()))
    }

    /// POST /search_sse → the recorded step sequence plus terminal outcome.
    pub async fn run_steps(&self, request: &SearchRequest) -> Result<StepResponse, ClientError> {
        let resp = self.post("/search_sse", request).await?;
        let body = self.handle_status(resp).await?;
        match serde_json::from_str::<StepReply>(&body) {
            Ok(StepReply::Steps(response)) => Ok(response),
            Ok(StepReply::Failure { error }) => Err(ClientError::Rejected(error)),
            Err(e) => Err(ClientError::ParseError(e.to_string())),
        }
    }

    /// POST /process_graph → terminal outcome only, no step events.
    pub async fn run_direct(&self, request: &SearchRequest) -> Result<Outcome, ClientError> {
        let resp = self.post("/process_graph", request).await?;
        let body = self.handle_status(resp).await?;
        serde_json::from_str::<Outcome>(&body).map_err(|e| ClientError::ParseError(e.to_string()))
    }
}

/// Pull the `error` field out of a JSON error body, falling back to the raw
/// text.
fn extract_error(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| body.to_string())
}

// =============================================================================
// TESTS
// =============================================================================
