//! Animechan API client.
//!
//! A single-shot client for the random-quote endpoint. There is no retry and
//! no rate limiting: the process performs one request and exits, so the
//! caller gets the first outcome, success or failure.

use super::types::{Quote, QuoteResponse};
use crate::error::FetchError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Production Animechan API base URL
pub const DEFAULT_BASE_URL: &str = "https://animechan.io/api/v1";

/// Animechan API v1 client
pub struct AnimechanClient {
    /// HTTP client
    client: Client,
    /// Base URL for the Animechan API
    base_url: String,
}

impl AnimechanClient {
    /// Create a new Animechan client
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("quote-fetcher/0.1.0")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch one random quote
    ///
    /// Performs a single GET against `/quotes/random` and validates the
    /// response in stages: transport and HTTP status first, then JSON
    /// well-formedness, then the expected payload shape. Each stage maps to
    /// its own [`FetchError`] variant.
    pub async fn fetch_random_quote(&self) -> Result<Quote, FetchError> {
        let url = format!("{}/quotes/random", self.base_url);

        debug!(url = %url, "Requesting random quote");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, error = %e, "Request error");
                return Err(FetchError::Transport(e));
            }
        };

        if let Err(e) = response.error_for_status_ref() {
            warn!(url = %url, status = %response.status(), "Request failed");
            return Err(FetchError::Transport(e));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to read response body");
                return Err(FetchError::Transport(e));
            }
        };

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            warn!(url = %url, error = %e, "Response body is not JSON");
            FetchError::Parse(e)
        })?;

        let parsed: QuoteResponse = serde_json::from_value(value).map_err(|e| {
            warn!(url = %url, error = %e, "Response shape mismatch");
            FetchError::schema(e)
        })?;

        if parsed.status != "success" {
            warn!(url = %url, status = %parsed.status, "Endpoint reported non-success status");
            return Err(FetchError::unexpected_status(&parsed.status));
        }

        debug!(
            url = %url,
            anime = %parsed.data.anime.name,
            character = %parsed.data.character.name,
            "Quote received"
        );

        Ok(parsed.data)
    }
}
