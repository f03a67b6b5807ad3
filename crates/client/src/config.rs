//! Client configuration
//!
//! All settings are environment-driven with working defaults, so the
//! smoke binary and tests run without any setup.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TOKEN_PATH: &str = ".roomsense/token.json";

/// Settings for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash
    pub base_url: String,
    /// Per-request deadline enforced by the HTTP client
    pub timeout: Duration,
    /// Where the file-backed token store persists the auth token
    pub token_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token_path: PathBuf::from(DEFAULT_TOKEN_PATH),
        }
    }
}

impl ClientConfig {
    /// Read configuration from `ROOMSENSE_API_URL`,
    /// `ROOMSENSE_TIMEOUT_SECS` and `ROOMSENSE_TOKEN_PATH`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = std::env::var("ROOMSENSE_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let timeout = match std::env::var("ROOMSENSE_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    warn!(value = %raw, "Invalid ROOMSENSE_TIMEOUT_SECS, using default");
                    defaults.timeout
                }
            },
            Err(_) => defaults.timeout,
        };

        let token_path = std::env::var("ROOMSENSE_TOKEN_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.token_path);

        Self {
            base_url,
            timeout,
            token_path,
        }
    }
}
