//! Single-shot request helper shared by the endpoint functions.
//!
//! Responsibilities:
//! - Send a prepared `reqwest::RequestBuilder` exactly once.
//! - Turn non-success statuses into [`ClientError::ApiError`], preferring the
//!   SerpApi `{"error": "..."}` message over the raw body.
//!
//! Does NOT handle:
//! - Retries or backoff. A failed keyword is skipped by the caller.
//!
//! Invariants:
//! - Error values carry the request path only. The query string holds the
//!   API key and is never copied into an error or a log line.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ApiErrorBody;

/// Upper bound on how much of a non-JSON error body is kept in the message.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Send a request and return the response if its status is 2xx.
///
/// # Errors
///
/// Returns `ClientError::HttpError` for transport failures and
/// `ClientError::ApiError` for non-success statuses.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let path = response.url().path().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    debug!(status, path = %path, "SerpApi returned non-success status");

    Err(ClientError::ApiError {
        status,
        path,
        message: error_message(&body),
    })
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_serpapi_error_field() {
        assert_eq!(
            error_message(r#"{"error": "Invalid API key."}"#),
            "Invalid API key."
        );
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_error_message_truncates_long_bodies() {
        let body = "x".repeat(MAX_ERROR_BODY_CHARS * 2);
        assert_eq!(error_message(&body).len(), MAX_ERROR_BODY_CHARS);
    }
}
