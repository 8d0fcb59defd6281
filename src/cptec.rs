//! CPTEC wave and weather forecasts via BrasilAPI.
//!
//! The weather endpoint is backed by two upstream routes keyed by the CPTEC
//! city code: `/cptec/v1/ondas/{code}/{days}` for the wave bulletin and
//! `/cptec/v1/cidade/{code}` for the general forecast. The wave route is
//! primary; when it answers with a non-success status the client degrades to
//! the general forecast, and only when both report failure does the fetch
//! come back [`WaveForecast::Unavailable`].
//!
//! Transport and decode errors are NOT absorbed here; they propagate to the
//! handler's top-level error path. Only the status check drives the
//! degradation ladder.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

/// Wave bulletin as served by the CPTEC `ondas` route.
///
/// Field names are the upstream's Portuguese wire names; the shaper in
/// [`crate::report`] renames them for the public contract.
#[derive(Debug, Clone, Deserialize)]
pub struct WaveBulletin {
    #[serde(default)]
    pub cidade: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub atualizado_em: Option<String>,
    #[serde(default)]
    pub ondas: Vec<WaveDay>,
}

/// One forecast day of the wave bulletin.
#[derive(Debug, Clone, Deserialize)]
pub struct WaveDay {
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub dados_ondas: Vec<WaveSample>,
}

/// One sampled condition within a forecast day.
#[derive(Debug, Clone, Deserialize)]
pub struct WaveSample {
    /// Wind speed in km/h
    pub vento: f64,
    pub direcao_vento: String,
    pub direcao_vento_desc: String,
    /// Wave height in meters
    pub altura_onda: f64,
    pub direcao_onda: String,
    pub direcao_onda_desc: String,
    /// Sea state descriptor, e.g. "Fraco" / "Moderado" / "Forte"
    pub agitacao: String,
    /// Sample hour, e.g. "12Z"
    pub hora: String,
}

/// Outcome of the two-tier weather fetch.
#[derive(Debug)]
pub enum WaveForecast {
    /// Primary wave bulletin.
    Waves(WaveBulletin),
    /// General forecast payload; waves were unavailable.
    Forecast(Value),
    /// Both routes answered with a failure status.
    Unavailable,
}

/// Client for the CPTEC forecast routes.
#[derive(Clone)]
pub struct CptecClient {
    http: Client,
    base_url: String,
}

impl CptecClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch the wave forecast for a city code, degrading to the general
    /// forecast when the wave route is down.
    ///
    /// `days` is forwarded verbatim; the upstream clamps it.
    pub async fn wave_forecast(&self, code: u32, days: &str) -> Result<WaveForecast, reqwest::Error> {
        let url = format!("{}/cptec/v1/ondas/{}/{}", self.base_url, code, days);
        let response = self.http.get(&url).send().await?;

        if response.status().is_success() {
            let bulletin = response.json::<WaveBulletin>().await?;
            return Ok(WaveForecast::Waves(bulletin));
        }
        tracing::warn!(
            code,
            status = %response.status(),
            "wave route unavailable, trying general forecast"
        );

        let url = format!("{}/cptec/v1/cidade/{}", self.base_url, code);
        let response = self.http.get(&url).send().await?;

        if response.status().is_success() {
            let data = response.json::<Value>().await?;
            return Ok(WaveForecast::Forecast(data));
        }
        tracing::warn!(code, status = %response.status(), "general forecast unavailable");

        Ok(WaveForecast::Unavailable)
    }
}
