//! Resolved configuration types.
//!
//! Responsibilities:
//! - Hold the effective settings produced by `ConfigLoader::build()`.
//! - Keep the SerpApi credential wrapped in `SecretString`.
//!
//! Does NOT handle:
//! - Loading or merging settings (see `loader`).
//!
//! Invariants:
//! - `api_key` and `target_domain` are never empty once a `Config` exists.
//! - `Debug` output never reveals the API key.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_SERPAPI_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Connection settings for the SerpApi search endpoint.
#[derive(Debug, Clone)]
pub struct SerpApiConfig {
    /// API key sent as the `api_key` query parameter.
    pub api_key: SecretString,
    /// Endpoint root, without trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Effective settings for one tracker run.
#[derive(Debug, Clone)]
pub struct Config {
    pub serpapi: SerpApiConfig,
    /// Substring matched against organic result links.
    pub target_domain: String,
    /// Service account key used for the optional spreadsheet mirror.
    pub sheets_credentials: Option<PathBuf>,
}

impl Config {
    /// Create a config with default connection settings.
    pub fn new(api_key: SecretString, target_domain: String) -> Self {
        Self {
            serpapi: SerpApiConfig {
                api_key,
                base_url: DEFAULT_SERPAPI_BASE_URL.to_string(),
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            target_domain,
            sheets_credentials: None,
        }
    }
}
