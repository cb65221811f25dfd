//! Per-keyword tracking loop.
//!
//! Responsibilities:
//! - Query each keyword once, in file order.
//! - Collect the records of successful queries.
//!
//! Does NOT handle:
//! - Persisting records (see `output` and `sink`).
//!
//! Invariants:
//! - Output order matches keyword order, minus failed keywords.
//! - One keyword's failure never stops the loop.

use serp_client::{ClientError, RankingRecord, SerpClient};
use tracing::{info, warn};

/// Something that can rank a domain for a keyword.
pub(crate) trait RankSource {
    async fn fetch_rank(
        &self,
        keyword: &str,
        target_domain: &str,
    ) -> Result<RankingRecord, ClientError>;
}

impl RankSource for SerpClient {
    async fn fetch_rank(
        &self,
        keyword: &str,
        target_domain: &str,
    ) -> Result<RankingRecord, ClientError> {
        SerpClient::fetch_rank(self, keyword, target_domain).await
    }
}

/// Track every keyword sequentially, skipping failures.
pub(crate) async fn track_keywords<S: RankSource>(
    source: &S,
    keywords: &[String],
    target_domain: &str,
) -> Vec<RankingRecord> {
    info!("Tracking {} keywords for {}", keywords.len(), target_domain);

    let mut records = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        match source.fetch_rank(keyword, target_domain).await {
            Ok(record) => records.push(record),
            // Already logged at error level by the client
            Err(_) => continue,
        }
    }

    let failed = keywords.len() - records.len();
    if failed > 0 {
        warn!(
            "{} of {} keywords failed and were skipped",
            failed,
            keywords.len()
        );
    }
    records
}
