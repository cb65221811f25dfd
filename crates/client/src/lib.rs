//! SerpApi search client and rank extraction.
//!
//! This crate issues one organic search per keyword against SerpApi,
//! finds where a target domain ranks in the results, and produces the
//! flat [`RankingRecord`] the tracker persists. With the `sheets` feature
//! it also provides a minimal Google Sheets client for mirroring records.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod extract;
pub mod models;
pub mod serde_helpers;

#[cfg(feature = "sheets")]
pub mod sheets;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::SerpClient;
pub use client::builder::SerpClientBuilder;
pub use error::{ClientError, Result};
pub use extract::find_rank;
pub use models::{OrganicResult, RECORD_COLUMNS, RankMatch, RankingRecord, SearchResponse};
