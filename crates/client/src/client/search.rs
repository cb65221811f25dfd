//! Search and rank-fetching methods for [`SerpClient`].
//!
//! Responsibilities:
//! - Issue one SerpApi query per keyword.
//! - Convert the response into a [`RankingRecord`] stamped with the
//!   instant the query was issued.
//!
//! Does NOT handle:
//! - Deciding whether a failed keyword aborts the run. Callers decide.

use chrono::Utc;
use tracing::{debug, error};

use crate::client::SerpClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{RankingRecord, SearchResponse};

impl SerpClient {
    /// Run a raw search for `keyword`.
    pub async fn search(&self, keyword: &str) -> Result<SearchResponse> {
        endpoints::search(
            &self.http,
            &self.base_url,
            &self.api_key,
            &self.engine,
            keyword,
        )
        .await
    }

    /// Query SerpApi for `keyword` and locate `target_domain` in the organic results.
    ///
    /// A keyword whose results never mention the domain still yields a record
    /// with empty rank and url. Failures are logged at error level naming the
    /// keyword and returned to the caller.
    pub async fn fetch_rank(&self, keyword: &str, target_domain: &str) -> Result<RankingRecord> {
        let issued_at = Utc::now();

        match self.search(keyword).await {
            Ok(response) => {
                let record =
                    RankingRecord::from_response(keyword, &response, target_domain, issued_at);
                debug!(
                    keyword,
                    rank = ?record.rank(),
                    organic_results = response.organic_results.len(),
                    "Fetched ranking"
                );
                Ok(record)
            }
            Err(e) => {
                error!("Error fetching SERP for {}: {}", keyword, e);
                Err(e)
            }
        }
    }
}
