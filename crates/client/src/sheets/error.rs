//! Error types for the Google Sheets client.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Sheets operations.
pub type Result<T> = std::result::Result<T, SheetsError>;

/// Errors that can occur while mirroring records to Google Sheets.
#[derive(Error, Debug)]
pub enum SheetsError {
    /// The service-account credentials file could not be read.
    #[error("Failed to read credentials file {path}: {kind}")]
    CredentialsRead {
        path: PathBuf,
        kind: std::io::ErrorKind,
    },

    /// The credentials file is not a service-account key.
    #[error("Invalid credentials file {path}: {source}")]
    CredentialsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The assertion JWT could not be signed with the service-account key.
    #[error("Failed to sign service account assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// The OAuth token endpoint rejected the assertion.
    #[error("Token exchange failed ({status}): {message}")]
    TokenExchange { status: u16, message: String },

    /// No spreadsheet with the given title is visible to the service account.
    #[error("Spreadsheet not found: {0}")]
    SpreadsheetNotFound(String),

    /// The spreadsheet exists but has no worksheets.
    #[error("Spreadsheet {0} has no worksheets")]
    NoWorksheets(String),

    /// Non-success status from the Drive or Sheets API.
    #[error("Google API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Success status but an unexpected body.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}
