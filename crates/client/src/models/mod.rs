//! Data models for SerpApi responses and ranking records.
//!
//! This module contains all the data structures used to represent
//! search responses from SerpApi and the flat records derived from them.
//!
//! # Submodules
//! - `search`: Organic results and aggregate search information
//! - `record`: The per-keyword ranking record

mod record;
mod search;

pub use record::{RECORD_COLUMNS, RankMatch, RankingRecord};
pub use search::{ApiErrorBody, OrganicResult, SearchInformation, SearchResponse};
