//! Shared application state.

use crate::config::Config;
use crate::cptec::CptecClient;
use crate::tabuamare::TabuamareClient;
use std::time::Duration;

/// Per-process state handed to every handler.
///
/// Holds the two upstream clients, which share one connection pool. Cloning
/// is cheap (the inner HTTP client is reference-counted), so axum clones
/// this freely per request.
#[derive(Clone)]
pub struct AppState {
    pub cptec: CptecClient,
    pub tabuamare: TabuamareClient,
}

impl AppState {
    /// Build the upstream clients from configuration.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream.timeout_secs))
            .build()?;

        Ok(Self {
            cptec: CptecClient::new(http.clone(), config.upstream.brasilapi_base.clone()),
            tabuamare: TabuamareClient::new(http, config.upstream.tabuamare_base.clone()),
        })
    }
}
