//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test config file loading and its interaction with the default path.
//! - Test environment variable handling and precedence.
//! - Test mandatory-setting and value validation.
//! - Test `.env` loading and the `DOTENV_DISABLED` gate.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization (cwd changes).
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable `from_env()` reads, unset. Pass to `temp_env::with_vars`
/// (optionally chained with overrides) so host settings never leak in.
pub fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("SERPAPI_KEY", None),
        ("TARGET_DOMAIN", None),
        ("GOOGLE_SHEETS_CREDENTIALS", None),
        ("SERPAPI_BASE_URL", None),
        ("SERPAPI_TIMEOUT", None),
    ]
}

/// `cleared_env()` with the given variables set.
pub fn env_with(
    overrides: &[(&'static str, &'static str)],
) -> Vec<(&'static str, Option<&'static str>)> {
    let mut vars: Vec<_> = cleared_env()
        .into_iter()
        .filter(|(k, _)| !overrides.iter().any(|(o, _)| o == k))
        .collect();
    vars.extend(overrides.iter().map(|(k, v)| (*k, Some(*v))));
    vars
}
