//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the SerpApi client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

// Re-export test utilities from serp-client
#[allow(unused_imports)]
pub use serp_client::testing::{fixture_path, load_fixture, search_payload};

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use serp_client::{ClientError, SerpClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key used by every mocked client.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-serpapi-key";

/// Build a client pointed at the mock server.
#[allow(dead_code)]
pub fn mock_client(mock_server: &MockServer) -> SerpClient {
    SerpClient::builder()
        .api_key(TEST_API_KEY.to_string())
        .base_url(mock_server.uri())
        .build()
        .expect("Failed to build test client")
}
