//! Testing utilities for SerpApi client tests.
//!
//! This module provides helpers for loading JSON fixtures and building
//! search payloads. Available when running tests or when the `test-utils`
//! feature is enabled.
//!
//! # Example
//! ```ignore
//! use serp_client::testing::{load_fixture, search_payload};
//!
//! let fixture = load_fixture("search/ranked.json");
//! let payload = search_payload(&[Some("https://example.com/")], Some(42));
//! ```

use std::path::{Path, PathBuf};

use serde_json::{Value, json};

/// Absolute path of a file under the fixtures directory.
pub fn fixture_path(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "search/ranked.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> Value {
    let full_path = self::fixture_path(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Build a `search.json` payload with one organic result per entry.
///
/// `None` entries produce results without a `link` field.
pub fn search_payload(links: &[Option<&str>], total_results: Option<u64>) -> Value {
    let organic: Vec<Value> = links
        .iter()
        .enumerate()
        .map(|(idx, link)| {
            let mut result = json!({
                "position": idx + 1,
                "title": format!("Result {}", idx + 1),
            });
            if let Some(link) = link {
                result["link"] = json!(link);
            }
            result
        })
        .collect();

    let mut payload = json!({
        "search_metadata": {"status": "Success"},
        "organic_results": organic,
    });
    if let Some(total) = total_results {
        payload["search_information"] = json!({"total_results": total});
    }
    payload
}
