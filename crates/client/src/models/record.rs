//! The per-keyword ranking record.
//!
//! Invariants:
//! - `rank` is present if and only if `url` is present. Both come from a
//!   single `Option<RankMatch>`, so the pair cannot be split.
//! - Records are immutable after construction; fields are read through accessors.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::extract::find_rank;
use crate::models::SearchResponse;

/// Output column order shared by every sink.
pub const RECORD_COLUMNS: [&str; 5] = ["keyword", "rank", "url", "search_volume", "timestamp"];

/// The first organic result whose link contains the target domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankMatch {
    /// 1-based position in the organic results.
    pub rank: usize,
    pub url: String,
}

/// Ranking of the target domain for one keyword at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRecord {
    keyword: String,
    rank: Option<usize>,
    url: Option<String>,
    search_volume: Option<u64>,
    timestamp: DateTime<Utc>,
}

impl RankingRecord {
    /// Create a record from an already-computed match.
    pub fn new(
        keyword: impl Into<String>,
        matched: Option<RankMatch>,
        search_volume: Option<u64>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let (rank, url) = match matched {
            Some(m) => (Some(m.rank), Some(m.url)),
            None => (None, None),
        };
        Self {
            keyword: keyword.into(),
            rank,
            url,
            search_volume,
            timestamp,
        }
    }

    /// Derive a record from a search response.
    ///
    /// `timestamp` should be the instant the query was issued.
    pub fn from_response(
        keyword: impl Into<String>,
        response: &SearchResponse,
        target_domain: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(
            keyword,
            find_rank(&response.organic_results, target_domain),
            response.total_results(),
            timestamp,
        )
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn search_volume(&self) -> Option<u64> {
        self.search_volume
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// RFC 3339 UTC timestamp with microseconds, e.g. `2026-10-16T08:15:42.123456Z`.
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}
