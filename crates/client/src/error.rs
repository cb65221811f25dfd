//! Error types for the SerpApi client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during SerpApi client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connect, timeout, body read).
    ///
    /// The request URL is stripped on conversion since its query holds the API key.
    #[error("HTTP error: {0}")]
    HttpError(#[source] reqwest::Error),

    /// Non-success status from SerpApi.
    ///
    /// `path` never includes the query string, which carries the API key.
    #[error("API error ({status}) at {path}: {message}")]
    ApiError {
        status: u16,
        path: String,
        message: String,
    },

    /// Success status but the body was not a usable search response.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client was built without an API key.
    #[error("SerpApi key is required")]
    MissingApiKey,
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::HttpError(e.without_url())
    }
}

impl ClientError {
    /// HTTP status for API errors, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
