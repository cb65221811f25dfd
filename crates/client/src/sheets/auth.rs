//! Service-account authentication for Google APIs.
//!
//! Responsibilities:
//! - Load a service-account key file.
//! - Sign an RS256 assertion JWT and exchange it for a bearer token.
//!
//! Does NOT handle:
//! - Token refresh. A token lives for one hour, which outlasts a tracker run.
//!
//! Invariants:
//! - The private key and access token stay wrapped in `SecretString`.

use std::path::Path;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sheets::error::{Result, SheetsError};

/// OAuth scopes requested for the mirror: spreadsheet edits plus Drive lookup by name.
pub const SCOPES: &str =
    "https://www.googleapis.com/auth/spreadsheets https://www.googleapis.com/auth/drive";

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// The fields of a Google service-account key file the client needs.
#[derive(Debug, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: SecretString,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl ServiceAccountKey {
    /// Read and parse a key file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SheetsError::CredentialsRead {
            path: path.to_path_buf(),
            kind: e.kind(),
        })?;
        serde_json::from_str(&content).map_err(|source| SheetsError::CredentialsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Sign the assertion JWT for the token exchange.
    pub fn assertion(&self) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope: SCOPES,
            aud: &self.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };
        let key = EncodingKey::from_rsa_pem(self.private_key.expose_secret().as_bytes())?;
        Ok(encode(&Header::new(Algorithm::RS256), &claims, &key)?)
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: SecretString,
}

#[derive(Debug, Deserialize)]
struct TokenErrorBody {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Exchange a signed assertion for an access token.
pub async fn fetch_access_token(client: &Client, key: &ServiceAccountKey) -> Result<SecretString> {
    let assertion = key.assertion()?;
    debug!(client_email = %key.client_email, "Requesting Google access token");

    let response = client
        .post(&key.token_uri)
        .form(&[
            ("grant_type", JWT_BEARER_GRANT),
            ("assertion", assertion.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        let message = match serde_json::from_str::<TokenErrorBody>(&body) {
            Ok(parsed) => match parsed.error_description {
                Some(desc) => format!("{}: {}", parsed.error, desc),
                None => parsed.error,
            },
            Err(_) => body,
        };
        return Err(SheetsError::TokenExchange {
            status: status.as_u16(),
            message,
        });
    }

    let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
        SheetsError::InvalidResponse(format!("Failed to parse token response: {}", e))
    })?;
    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parse_defaults_token_uri() {
        let key: ServiceAccountKey = serde_json::from_str(
            r#"{"type": "service_account", "client_email": "svc@proj.iam.gserviceaccount.com", "private_key": "pem"}"#,
        )
        .unwrap();
        assert_eq!(key.token_uri, DEFAULT_TOKEN_URI);
        assert_eq!(key.client_email, "svc@proj.iam.gserviceaccount.com");
    }

    #[test]
    fn test_key_debug_redacts_private_key() {
        let key: ServiceAccountKey = serde_json::from_str(
            r#"{"client_email": "svc@x", "private_key": "super-secret-pem"}"#,
        )
        .unwrap();
        assert!(!format!("{:?}", key).contains("super-secret-pem"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ServiceAccountKey::from_file(Path::new("/nonexistent/sa.json")).unwrap_err();
        assert!(matches!(
            err,
            SheetsError::CredentialsRead {
                kind: std::io::ErrorKind::NotFound,
                ..
            }
        ));
    }

    #[test]
    fn test_from_file_not_a_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sa.json");
        std::fs::write(&path, r#"{"installed": {}}"#).unwrap();

        let err = ServiceAccountKey::from_file(&path).unwrap_err();
        assert!(matches!(err, SheetsError::CredentialsParse { .. }));
    }

    #[test]
    fn test_assertion_rejects_non_pem_key() {
        let key: ServiceAccountKey =
            serde_json::from_str(r#"{"client_email": "svc@x", "private_key": "not a pem"}"#)
                .unwrap();
        assert!(matches!(key.assertion(), Err(SheetsError::Signing(_))));
    }
}
