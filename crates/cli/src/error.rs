//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define the process exit codes of a tracker run.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Per-keyword failures and spreadsheet failures still exit with `Success`.
//! - Configuration errors exit with `GeneralError` before any network call.

/// Structured exit codes for rank-tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The CSV was written. Some keywords may have been skipped.
    Success = 0,

    /// Configuration, keyword file, or CSV write failure.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}
