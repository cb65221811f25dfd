//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve default paths for the keyword list and config file.
//!
//! Non-responsibilities:
//! - Does not load configuration (see `rank_config::ConfigLoader`).
//! - Does not choose the dated output path (see `output::default_output_path`).

use clap::Parser;
use rank_config::constants::DEFAULT_KEYWORDS_FILE;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rank-tracker")]
#[command(
    about = "Track where a domain ranks in Google organic results for a list of keywords",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  rank-tracker\n  rank-tracker --keywords seo/keywords.txt --output out/ranks.csv\n  rank-tracker --google_sheet \"Keyword Rankings\"\n  RUST_LOG=debug rank-tracker --config prod.yaml\n"
)]
pub struct Cli {
    /// Keyword list, one keyword per line
    #[arg(long, value_name = "FILE", default_value = DEFAULT_KEYWORDS_FILE)]
    pub keywords: PathBuf,

    /// YAML config file supplying values missing from the environment.
    ///
    /// When omitted, `config.yaml` is read if it exists.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// CSV output path [default: results/keyword_rankings_<YYYY-MM-DD>.csv]
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Name of a Google Sheet to append results to (requires GOOGLE_SHEETS_CREDENTIALS)
    #[arg(long = "google_sheet", alias = "google-sheet", value_name = "NAME")]
    pub google_sheet: Option<String>,
}

impl Cli {
    /// Explicit config file, ignoring blank values.
    ///
    /// `None` means the loader falls back to an optional `config.yaml`.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config
            .as_ref()
            .filter(|path| !path.to_string_lossy().trim().is_empty())
            .cloned()
    }

    /// Spreadsheet name, ignoring blank values.
    pub fn sheet_name(&self) -> Option<&str> {
        self.google_sheet
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
