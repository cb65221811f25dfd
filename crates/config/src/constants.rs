//! Centralized constants for the rank tracker workspace.
//!
//! This module contains default values and environment variable names used
//! across crates to avoid magic string duplication.

// =============================================================================
// Setting Keys
// =============================================================================

/// SerpApi credential. Mandatory.
pub const SERPAPI_KEY: &str = "SERPAPI_KEY";

/// Substring identifying the tracked domain in result links. Mandatory.
pub const TARGET_DOMAIN: &str = "TARGET_DOMAIN";

/// Path to a Google service account JSON key. Optional.
pub const GOOGLE_SHEETS_CREDENTIALS: &str = "GOOGLE_SHEETS_CREDENTIALS";

/// Override for the SerpApi base URL. Optional.
pub const SERPAPI_BASE_URL: &str = "SERPAPI_BASE_URL";

/// HTTP timeout for SerpApi requests, in seconds. Optional.
pub const SERPAPI_TIMEOUT: &str = "SERPAPI_TIMEOUT";

// =============================================================================
// Defaults
// =============================================================================

/// Default SerpApi endpoint root.
pub const DEFAULT_SERPAPI_BASE_URL: &str = "https://serpapi.com";

/// Default search engine selector sent with every query.
pub const DEFAULT_ENGINE: &str = "google";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Keyword list read when `--keywords` is not given.
pub const DEFAULT_KEYWORDS_FILE: &str = "keywords.txt";

/// Directory for the dated default output file.
pub const DEFAULT_RESULTS_DIR: &str = "results";
