//! Tide tables from the tabuamare API.
//!
//! Single route keyed by the port's display name and a `YYYY-MM-DD` date.
//! The payload is passed through to the caller untouched, so it stays a raw
//! [`Value`]. Any failure here (connect error, failure status, or a body
//! that is not JSON) is an expected signal for the calculated model in
//! [`crate::fallback`], so it surfaces as a typed error rather than being
//! handled in place.

use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Why a tide-table fetch did not produce a payload.
#[derive(Debug, Error)]
pub enum TideFetchError {
    /// Transport or decode failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered, but not successfully
    #[error("unexpected status: {0}")]
    Status(StatusCode),
}

/// Client for the tabuamare tide-table route.
#[derive(Clone)]
pub struct TabuamareClient {
    http: Client,
    base_url: String,
}

impl TabuamareClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch the tide table for a port and date.
    ///
    /// `port_name` is the display name ("Porto do Recife"); the query
    /// builder percent-encodes it.
    pub async fn tide_table(&self, port_name: &str, date: &str) -> Result<Value, TideFetchError> {
        let response = self
            .http
            .get(format!("{}/tides", self.base_url))
            .query(&[("port", port_name), ("date", date)])
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TideFetchError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}
