//! Main SerpApi client.
//!
//! This module provides the primary [`SerpClient`] for querying the SerpApi
//! search endpoint and turning responses into ranking records.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `search`: Search and rank-fetching methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Rank matching rules (delegated to [`crate::extract`])
//!
//! # Invariants
//! - Exactly one HTTP request per `search` / `fetch_rank` call; nothing is retried.

pub mod builder;
mod search;

use secrecy::SecretString;

/// SerpApi client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use serp_client::SerpClient;
///
/// let client = SerpClient::builder()
///     .api_key("my-key".to_string())
///     .build()?;
/// let record = client.fetch_rank("rust web framework", "example.com").await?;
/// ```
#[derive(Debug)]
pub struct SerpClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: SecretString,
    pub(crate) engine: String,
}

impl SerpClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SerpClientBuilder {
        builder::SerpClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the engine selector sent with every query.
    pub fn engine(&self) -> &str {
        &self.engine
    }
}
