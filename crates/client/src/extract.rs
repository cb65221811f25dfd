//! Rank extraction from organic results.
//!
//! Matching is plain substring containment against the full link string,
//! not host comparison: `example.com` also matches
//! `https://blog.example.com/` and `https://other.org/?ref=example.com`.

use crate::models::{OrganicResult, RankMatch};

/// Find the first organic result whose link contains `target_domain`.
///
/// Positions are 1-based and follow list order. Results without a link
/// never match. Returns `None` when nothing matches.
pub fn find_rank(results: &[OrganicResult], target_domain: &str) -> Option<RankMatch> {
    results.iter().enumerate().find_map(|(idx, result)| {
        let link = result.link.as_deref()?;
        link.contains(target_domain).then(|| RankMatch {
            rank: idx + 1,
            url: link.to_string(),
        })
    })
}
