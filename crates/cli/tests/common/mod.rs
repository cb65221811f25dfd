//! Shared test utilities for rank-tracker integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide small fixtures (keyword files, mocked search responses).
//!
//! Does NOT:
//! - Handle live test configuration.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Every command runs inside a caller-provided temp directory so default
//!   paths (`keywords.txt`, `config.yaml`, `results/`) never touch the repo.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Returns a hermetic `rank-tracker` command running in `dir`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Every variable the tracker reads is cleared from the host environment.
pub fn rank_tracker_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rank-tracker");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("SERPAPI_KEY")
        .env_remove("TARGET_DOMAIN")
        .env_remove("GOOGLE_SHEETS_CREDENTIALS")
        .env_remove("SERPAPI_BASE_URL")
        .env_remove("SERPAPI_TIMEOUT")
        .env_remove("RUST_LOG");

    cmd.current_dir(dir);
    cmd
}

/// Returns a fully configured command pointed at a mock SerpApi server.
#[allow(dead_code)]
pub fn configured_cmd(dir: &Path, server: &MockServer) -> Command {
    let mut cmd = rank_tracker_cmd(dir);
    cmd.env("SERPAPI_KEY", "test-key")
        .env("TARGET_DOMAIN", "example.com")
        .env("SERPAPI_BASE_URL", server.uri());
    cmd
}

/// Write `keywords.txt` into `dir`.
#[allow(dead_code)]
pub fn write_keywords(dir: &Path, keywords: &[&str]) -> PathBuf {
    let path = dir.join("keywords.txt");
    std::fs::write(&path, keywords.join("\n")).unwrap();
    path
}

/// Search payload with one organic result per link.
#[allow(dead_code)]
pub fn search_body(links: &[&str]) -> Value {
    let organic: Vec<Value> = links
        .iter()
        .enumerate()
        .map(|(idx, link)| json!({"position": idx + 1, "title": "t", "link": link}))
        .collect();
    json!({
        "search_metadata": {"status": "Success"},
        "search_information": {"total_results": 5000},
        "organic_results": organic
    })
}

/// Mount a search response for a single keyword.
#[allow(dead_code)]
pub async fn mock_keyword(server: &MockServer, keyword: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", keyword))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Parse a CSV file into rows of cells, header included.
#[allow(dead_code)]
pub fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to read CSV: {}", path.display()));
    content
        .lines()
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}
