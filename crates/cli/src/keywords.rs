//! Keyword list loading.
//!
//! Responsibilities:
//! - Read a UTF-8 text file with one keyword per line.
//!
//! Invariants:
//! - Keywords are trimmed; blank lines are dropped.
//! - File order and duplicates are preserved.

use anyhow::{Context, Result};
use std::path::Path;

/// Read keywords from `path`.
pub fn load_keywords(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keywords file: {}", path.display()))?;
    Ok(parse_keywords(&content))
}

/// Split file content into keywords.
pub fn parse_keywords(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
