//! Client builder for constructing [`SerpClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (api_key, base_url)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`SerpClient`] methods)
//!
//! # Invariants
//! - `api_key` is required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::client::SerpClient;
use crate::error::{ClientError, Result};
use rank_config::{
    Config,
    constants::{DEFAULT_ENGINE, DEFAULT_SERPAPI_BASE_URL, DEFAULT_TIMEOUT_SECS},
};

/// Maximum number of HTTP redirects to follow.
const MAX_REDIRECTS: usize = 5;

/// Builder for creating a new [`SerpClient`].
///
/// All options have defaults except `api_key`.
pub struct SerpClientBuilder {
    api_key: Option<SecretString>,
    base_url: String,
    engine: String,
    timeout: Duration,
}

impl Default for SerpClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_SERPAPI_BASE_URL.to_string(),
            engine: DEFAULT_ENGINE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SerpClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SerpApi key.
    pub fn api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the SerpApi endpoint root, e.g. `https://serpapi.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the engine selector. Default is `google`.
    pub fn engine(mut self, engine: String) -> Self {
        self.engine = engine;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from the resolved configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.api_key = Some(config.serpapi.api_key.clone());
        self.base_url = config.serpapi.base_url.clone();
        self.timeout = config.serpapi.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`SerpClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingApiKey`] if no non-empty key was provided.
    /// Returns [`ClientError::InvalidUrl`] if the base URL is empty.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<SerpClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ClientError::MissingApiKey)?;

        let base_url = Self::normalize_base_url(self.base_url);
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is required".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(SerpClient {
            http,
            base_url,
            api_key,
            engine: self.engine,
        })
    }
}
