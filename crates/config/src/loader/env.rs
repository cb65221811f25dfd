//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for tracker configuration.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading from the config file (see file.rs).
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Environment variables take precedence over config file settings.
//! - A set but blank `SERPAPI_KEY`, `TARGET_DOMAIN` or `GOOGLE_SHEETS_CREDENTIALS`
//!   clears any value from the config file.
//! - Blank `SERPAPI_BASE_URL` / `SERPAPI_TIMEOUT` are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    GOOGLE_SHEETS_CREDENTIALS, SERPAPI_BASE_URL, SERPAPI_KEY, SERPAPI_TIMEOUT, TARGET_DOMAIN,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read an environment variable that overrides whenever it is set.
///
/// Returns `None` if unset, `Some(None)` if set but blank, and
/// `Some(Some(trimmed))` otherwise.
pub fn env_var_override(key: &str) -> Option<Option<String>> {
    std::env::var_os(key).map(|_| env_var_or_none(key))
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over config file settings.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(key) = env_var_override(SERPAPI_KEY) {
        loader.set_api_key(key.map(|k| SecretString::new(k.into())));
    }
    if let Some(domain) = env_var_override(TARGET_DOMAIN) {
        loader.set_target_domain(domain);
    }
    if let Some(path) = env_var_override(GOOGLE_SHEETS_CREDENTIALS) {
        loader.set_sheets_credentials(path.map(PathBuf::from));
    }
    if let Some(url) = env_var_or_none(SERPAPI_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(timeout) = env_var_or_none(SERPAPI_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: SERPAPI_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    Ok(())
}
