//! CSV result file.
//!
//! Responsibilities:
//! - Render ranking records as CSV with a fixed header.
//! - Write the file atomically, creating parent directories.
//!
//! Invariants:
//! - Columns follow `RECORD_COLUMNS`; absent values are empty cells.
//! - The header is written even when there are no records.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use rank_config::constants::DEFAULT_RESULTS_DIR;
use serp_client::{RECORD_COLUMNS, RankingRecord};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Dated default output path, e.g. `results/keyword_rankings_2026-10-16.csv`.
pub fn default_output_path() -> PathBuf {
    output_path_for(Utc::now().date_naive())
}

fn output_path_for(date: NaiveDate) -> PathBuf {
    Path::new(DEFAULT_RESULTS_DIR).join(format!(
        "keyword_rankings_{}.csv",
        date.format("%Y-%m-%d")
    ))
}

/// One CSV row, in `RECORD_COLUMNS` order.
pub fn record_row(record: &RankingRecord) -> [String; 5] {
    [
        record.keyword().to_string(),
        record.rank().map(|r| r.to_string()).unwrap_or_default(),
        record.url().unwrap_or_default().to_string(),
        record
            .search_volume()
            .map(|v| v.to_string())
            .unwrap_or_default(),
        record.timestamp_rfc3339(),
    ]
}

/// Render records as CSV bytes.
pub fn render_csv(records: &[RankingRecord]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut w = csv::Writer::from_writer(&mut buffer);
        w.write_record(RECORD_COLUMNS)
            .context("Failed to write CSV headers")?;
        for record in records {
            w.write_record(record_row(record))
                .context("Failed to write CSV record")?;
        }
        w.flush().context("Failed to flush CSV writer")?;
    }
    Ok(buffer)
}

/// Write records to `path`, replacing any existing file.
pub fn write_csv(records: &[RankingRecord], path: &Path) -> Result<()> {
    let buffer = render_csv(records)?;

    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent_dir)
        .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;
    temp_file
        .write_all(&buffer)
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
