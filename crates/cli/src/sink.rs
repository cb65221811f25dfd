//! Spreadsheet mirror for ranking records.
//!
//! Responsibilities:
//! - Decide once at startup whether records are mirrored to Google Sheets.
//! - Append one row per record to the first worksheet of the named spreadsheet.
//!
//! Does NOT handle:
//! - The CSV file, which is always written first (see `output`).
//!
//! Invariants:
//! - Mirroring failures never change the exit status; the caller logs them.
//! - Appends stop at the first failed row.

#[cfg(feature = "sheets")]
use anyhow::Context;
use anyhow::Result;
use serp_client::RankingRecord;
use std::path::Path;
#[cfg(feature = "sheets")]
use std::path::PathBuf;
use tracing::warn;

/// Where records are mirrored after the CSV is written.
#[derive(Debug, PartialEq, Eq)]
pub enum SpreadsheetSink {
    /// No sheet name or no credentials; nothing to do.
    Disabled,
    /// A sheet was requested but this build has no Sheets support.
    #[cfg_attr(feature = "sheets", allow(dead_code))]
    Unavailable { sheet: String },
    /// Append to the named Google spreadsheet.
    #[cfg(feature = "sheets")]
    Google { sheet: String, credentials: PathBuf },
}

impl SpreadsheetSink {
    /// Pick the sink for this run.
    ///
    /// Mirroring needs both a sheet name and a credentials path.
    pub fn select(sheet_name: Option<&str>, credentials: Option<&Path>) -> Self {
        match (sheet_name, credentials) {
            (Some(sheet), Some(credentials)) => Self::enabled(sheet, credentials),
            _ => Self::Disabled,
        }
    }

    #[cfg(feature = "sheets")]
    fn enabled(sheet: &str, credentials: &Path) -> Self {
        Self::Google {
            sheet: sheet.to_string(),
            credentials: credentials.to_path_buf(),
        }
    }

    #[cfg(not(feature = "sheets"))]
    fn enabled(sheet: &str, _credentials: &Path) -> Self {
        Self::Unavailable {
            sheet: sheet.to_string(),
        }
    }

    /// Mirror `records`, returning how many rows were appended.
    pub async fn mirror(&self, records: &[RankingRecord]) -> Result<usize> {
        match self {
            Self::Disabled => Ok(0),
            Self::Unavailable { sheet } => {
                warn!(
                    "Google Sheets support not available; skipping spreadsheet update for {}",
                    sheet
                );
                Ok(0)
            }
            #[cfg(feature = "sheets")]
            Self::Google { sheet, credentials } => {
                append_to_google(sheet, credentials, records).await
            }
        }
    }
}

#[cfg(feature = "sheets")]
async fn append_to_google(
    sheet: &str,
    credentials: &Path,
    records: &[RankingRecord],
) -> Result<usize> {
    use serp_client::sheets::{SheetsClient, record_values};
    use tracing::info;

    let client = SheetsClient::builder(credentials)
        .connect()
        .await
        .context("Failed to authenticate with Google Sheets")?;
    let worksheet = client
        .open(sheet)
        .await
        .with_context(|| format!("Failed to open spreadsheet '{}'", sheet))?;

    for (appended, record) in records.iter().enumerate() {
        worksheet
            .append_row(record_values(record))
            .await
            .with_context(|| {
                format!(
                    "Failed to append row for '{}' after {} of {} rows",
                    record.keyword(),
                    appended,
                    records.len()
                )
            })?;
    }

    info!(
        "Appended {} rows to spreadsheet '{}' ({})",
        records.len(),
        sheet,
        worksheet.title()
    );
    Ok(records.len())
}
