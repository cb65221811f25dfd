//! Search response models for the SerpApi `search.json` endpoint.
//!
//! Only the fields the tracker reads are modeled; everything else in the
//! payload is ignored, so a shape change in an unread field never fails a
//! keyword.

use serde::Deserialize;

use crate::serde_helpers::opt_u64_lenient;

/// A single organic (non-paid) result. Rank comes from list order, so only
/// the link is read.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct OrganicResult {
    #[serde(default)]
    pub link: Option<String>,
}

impl OrganicResult {
    /// Build a result with only a link, mostly for tests and fixtures.
    pub fn with_link(link: impl Into<String>) -> Self {
        Self {
            link: Some(link.into()),
        }
    }
}

/// Aggregate information about the query.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct SearchInformation {
    #[serde(default, deserialize_with = "opt_u64_lenient")]
    pub total_results: Option<u64>,
}

/// Top-level search response.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
    #[serde(default)]
    pub search_information: Option<SearchInformation>,
}

impl SearchResponse {
    /// The engine's approximate total result count, if reported.
    pub fn total_results(&self) -> Option<u64> {
        self.search_information
            .as_ref()
            .and_then(|info| info.total_results)
    }
}

/// Error body SerpApi returns alongside non-success statuses.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiErrorBody {
    pub error: String,
}
