//! YAML config file loading.
//!
//! Responsibilities:
//! - Parse the key-value config file (`SERPAPI_KEY`, `TARGET_DOMAIN`,
//!   `GOOGLE_SHEETS_CREDENTIALS`, `SERPAPI_BASE_URL`, `SERPAPI_TIMEOUT`).
//! - Apply file settings to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - File settings are applied before environment variables (env vars take precedence).
//! - Unknown keys are ignored; blank values are treated as unset.
//! - An empty file is an empty mapping.

use secrecy::SecretString;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// On-disk shape of the config file.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConfigFile {
    #[serde(rename = "SERPAPI_KEY", default)]
    pub serpapi_key: Option<String>,
    #[serde(rename = "TARGET_DOMAIN", default)]
    pub target_domain: Option<String>,
    #[serde(rename = "GOOGLE_SHEETS_CREDENTIALS", default)]
    pub google_sheets_credentials: Option<String>,
    #[serde(rename = "SERPAPI_BASE_URL", default)]
    pub serpapi_base_url: Option<String>,
    #[serde(rename = "SERPAPI_TIMEOUT", default)]
    pub serpapi_timeout: Option<u64>,
}

impl ConfigFile {
    /// Parse config file contents. Whitespace-only input yields an empty config.
    pub(crate) fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).map_err(|source| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Apply config file settings to the loader.
///
/// When `required` is false a missing file is skipped with a debug log.
pub fn apply_file(
    loader: &mut ConfigLoader,
    path: &Path,
    required: bool,
) -> Result<(), ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            tracing::debug!(path = %path.display(), "No config file found, using environment only");
            return Ok(());
        }
        Err(e) => {
            return Err(ConfigError::ConfigFileRead {
                path: path.to_path_buf(),
                kind: e.kind(),
            });
        }
    };

    let file = ConfigFile::parse(&contents, path)?;
    apply_config_file(loader, file);
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Apply parsed config file values to the loader.
fn apply_config_file(loader: &mut ConfigLoader, file: ConfigFile) {
    if let Some(key) = non_blank(file.serpapi_key) {
        loader.set_api_key(Some(SecretString::new(key.into())));
    }
    if let Some(domain) = non_blank(file.target_domain) {
        loader.set_target_domain(Some(domain));
    }
    if let Some(path) = non_blank(file.google_sheets_credentials) {
        loader.set_sheets_credentials(Some(PathBuf::from(path)));
    }
    if let Some(url) = non_blank(file.serpapi_base_url) {
        loader.set_base_url(Some(url));
    }
    if let Some(secs) = file.serpapi_timeout {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_keys() {
        let yaml = concat!(
            "SERPAPI_KEY: abc123\n",
            "TARGET_DOMAIN: example.com\n",
            "GOOGLE_SHEETS_CREDENTIALS: creds.json\n",
        );
        let file = ConfigFile::parse(yaml, Path::new("config.yaml")).unwrap();

        assert_eq!(file.serpapi_key.as_deref(), Some("abc123"));
        assert_eq!(file.target_domain.as_deref(), Some("example.com"));
        assert_eq!(
            file.google_sheets_credentials.as_deref(),
            Some("creds.json")
        );
        assert!(file.serpapi_timeout.is_none());
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let yaml = "TARGET_DOMAIN: example.com\nSOMETHING_ELSE: 42\n";
        let file = ConfigFile::parse(yaml, Path::new("config.yaml")).unwrap();
        assert_eq!(file.target_domain.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_parse_empty_file() {
        let file = ConfigFile::parse("\n  \n", Path::new("config.yaml")).unwrap();
        assert!(file.serpapi_key.is_none());
        assert!(file.target_domain.is_none());
    }

    #[test]
    fn test_parse_null_values() {
        let yaml = "SERPAPI_KEY:\nTARGET_DOMAIN: ~\n";
        let file = ConfigFile::parse(yaml, Path::new("config.yaml")).unwrap();
        assert!(file.serpapi_key.is_none());
        assert!(file.target_domain.is_none());
    }

    #[test]
    fn test_parse_invalid_yaml_reports_path() {
        let err = ConfigFile::parse("- just\n- a list\n", Path::new("bad.yaml")).unwrap_err();
        match err {
            ConfigError::ConfigFileParse { path, .. } => assert_eq!(path, Path::new("bad.yaml")),
            other => panic!("Expected ConfigFileParse, got {:?}", other),
        }
    }

    #[test]
    fn test_non_blank_filters_whitespace() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(Some(" x ".to_string())), Some("x".to_string()));
        assert_eq!(non_blank(None), None);
    }
}
