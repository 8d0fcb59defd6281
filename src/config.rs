//! Configuration loaded from the praiamar.toml file.
//!
//! Covers the server bind address and the upstream base URLs and timeout.
//! The base URLs exist mostly for tests, which point the clients at local
//! mock servers; production deployments rarely need to change them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from praiamar.toml
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Upstream API configuration
    pub upstream: UpstreamConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. "0.0.0.0:8787"
    pub bind: String,
}

/// Upstream API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// BrasilAPI base URL (CPTEC wave and forecast routes)
    pub brasilapi_base: String,
    /// Tabuamare tide-table API base URL
    pub tabuamare_base: String,
    /// Timeout applied to every upstream request, in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                bind: "0.0.0.0:8787".to_string(),
            },
            upstream: UpstreamConfig {
                brasilapi_base: "https://brasilapi.com.br/api".to_string(),
                tabuamare_base: "https://tabuamare.devtu.qzz.io/api/v1".to_string(),
                timeout_secs: 10,
            },
        }
    }
}

impl Config {
    /// Load configuration from praiamar.toml in the working directory.
    /// Falls back to the default configuration if the file doesn't exist or
    /// is invalid.
    pub fn load() -> Self {
        Self::load_from_path("praiamar.toml")
    }

    /// Load configuration from the specified path, with the same fallback.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(error = %e, "invalid config file format, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("no config file found, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.server.bind, "0.0.0.0:8787");
        assert_eq!(config.upstream.brasilapi_base, "https://brasilapi.com.br/api");
        assert_eq!(config.upstream.timeout_secs, 10);
    }

    #[test]
    fn config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.server.bind, parsed.server.bind);
        assert_eq!(config.upstream.tabuamare_base, parsed.upstream.tabuamare_base);
    }

    #[test]
    fn load_nonexistent_file_falls_back_to_default() {
        let config = Config::load_from_path("/nonexistent/path/praiamar.toml");
        assert_eq!(config.server.bind, "0.0.0.0:8787");
    }

    #[test]
    fn load_invalid_file_falls_back_to_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"server = \"not a table\"").unwrap();

        let config = Config::load_from_path(file.path());
        assert_eq!(config.upstream.timeout_secs, 10);
    }

    #[test]
    fn load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[server]
bind = "127.0.0.1:9000"

[upstream]
brasilapi_base = "http://127.0.0.1:4010"
tabuamare_base = "http://127.0.0.1:4011"
timeout_secs = 2
"#,
        )
        .unwrap();

        let config = Config::load_from_path(file.path());
        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.upstream.brasilapi_base, "http://127.0.0.1:4010");
        assert_eq!(config.upstream.timeout_secs, 2);
    }
}
