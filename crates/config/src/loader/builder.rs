//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from the YAML config file, environment variables, and direct builder methods.
//! - Build the final `Config` and enforce the mandatory settings.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file parsing logic (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over config file values.
//! - Builder methods applied after `from_env()` take precedence over environment variables.
//! - `build()` fails before any network activity can happen if `SERPAPI_KEY` or
//!   `TARGET_DOMAIN` is unresolved.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_SERPAPI_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
    SERPAPI_BASE_URL, SERPAPI_KEY, TARGET_DOMAIN,
};
use crate::types::{Config, SerpApiConfig};

/// Configuration loader that builds config from the config file and environment variables.
#[derive(Default)]
pub struct ConfigLoader {
    api_key: Option<SecretString>,
    target_domain: Option<String>,
    sheets_credentials: Option<PathBuf>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read settings from an explicit config file path.
    ///
    /// Unlike the default `config.yaml`, an explicit path must exist.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from the YAML config file.
    ///
    /// Uses the path given to `with_config_path()`, or `config.yaml` in the
    /// working directory. A missing default file contributes nothing.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        match self.config_path.clone() {
            Some(path) => apply_file(&mut self, &path, true)?,
            None => apply_file(&mut self, &PathBuf::from(DEFAULT_CONFIG_FILE), false)?,
        }
        Ok(self)
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over config file settings.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the SerpApi key.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the target domain substring.
    pub fn with_target_domain(mut self, domain: String) -> Self {
        self.target_domain = Some(domain);
        self
    }

    /// Set the SerpApi base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let mut missing = Vec::new();
        if self.api_key.is_none() {
            missing.push(SERPAPI_KEY);
        }
        if self.target_domain.is_none() {
            missing.push(TARGET_DOMAIN);
        }

        let (Some(api_key), Some(target_domain)) = (self.api_key, self.target_domain) else {
            return Err(ConfigError::MissingRequired(missing));
        };

        let base_url = validate_and_normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_SERPAPI_BASE_URL),
        )?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self::validate_timeout(timeout)?;

        Ok(Config {
            serpapi: SerpApiConfig {
                api_key,
                base_url,
                timeout,
            },
            target_domain,
            sheets_credentials: self.sheets_credentials,
        })
    }

    /// Validates the request timeout.
    ///
    /// The timeout must be greater than 0 and not exceed `MAX_TIMEOUT_SECS`.
    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let timeout_secs = timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    /// Get the config file path if one was set explicitly.
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn set_api_key(&mut self, key: Option<SecretString>) {
        self.api_key = key;
    }

    pub(crate) fn set_target_domain(&mut self, domain: Option<String>) {
        self.target_domain = domain;
    }

    pub(crate) fn set_sheets_credentials(&mut self, path: Option<PathBuf>) {
        self.sheets_credentials = path;
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slash
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: SERPAPI_BASE_URL.into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://serpapi.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: SERPAPI_BASE_URL.into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: SERPAPI_BASE_URL.into(),
            message: "host is required (e.g. https://serpapi.com)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_strips_trailing_slash() {
        assert_eq!(
            validate_and_normalize_base_url("https://serpapi.com/").unwrap(),
            "https://serpapi.com"
        );
    }

    #[test]
    fn test_normalize_base_url_keeps_port_and_path() {
        assert_eq!(
            validate_and_normalize_base_url("  http://127.0.0.1:8080/proxy/ ").unwrap(),
            "http://127.0.0.1:8080/proxy"
        );
    }

    #[test]
    fn test_base_url_rejects_non_http_scheme() {
        let err = validate_and_normalize_base_url("ftp://serpapi.com").unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref var, .. } if var == SERPAPI_BASE_URL)
        );
    }

    #[test]
    fn test_base_url_rejects_relative() {
        assert!(validate_and_normalize_base_url("serpapi.com").is_err());
    }
}
