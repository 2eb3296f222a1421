//! Error types for quote fetching.
//!
//! A fetch can fail in three ways, all terminal: the endpoint was not
//! reachable (or answered with an error status), the body was not JSON, or
//! the JSON did not carry the expected quote payload. None of these is
//! retried; the single attempt either succeeds or the run reports failure.

use thiserror::Error;

/// Errors that can occur while fetching a quote
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network failure reaching the endpoint (DNS, connection refused,
    /// timeout) or a non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Parsed JSON does not match the expected quote payload
    #[error("Schema error: {0}")]
    Schema(String),
}

impl FetchError {
    /// Classify a payload that is valid JSON but not a quote response
    pub(crate) fn schema(err: serde_json::Error) -> Self {
        FetchError::Schema(err.to_string())
    }

    /// Classify a response whose `status` field is not `"success"`
    pub(crate) fn unexpected_status(status: &str) -> Self {
        FetchError::Schema(format!("unexpected response status {:?}", status))
    }
}
