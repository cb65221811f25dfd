//! SerpApi search endpoint.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::SearchResponse;

/// Path of the JSON search endpoint, relative to the base URL.
pub const SEARCH_PATH: &str = "/search.json";

/// Run one search query.
///
/// Sends `GET {base_url}/search.json?q=<query>&engine=<engine>&api_key=<key>`.
///
/// # Errors
///
/// Transport failures, non-success statuses, and bodies that are not a
/// search response JSON object are all returned as errors.
pub async fn search(
    client: &Client,
    base_url: &str,
    api_key: &SecretString,
    engine: &str,
    query: &str,
) -> Result<SearchResponse> {
    let url = format!("{}{}", base_url, SEARCH_PATH);

    let builder = client.get(&url).query(&[
        ("q", query),
        ("engine", engine),
        ("api_key", api_key.expose_secret()),
    ]);
    let response = send_request(builder).await?;

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse search response: {}", e))
    })
}
