//! Serde helpers for SerpApi's loosely typed JSON.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON numbers or strings for numeric fields.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//!
//! Invariants / assumptions:
//! - Aggregate counts such as `total_results` usually arrive as numbers, but some
//!   engines report them as strings, sometimes with thousands separators.
//! - An unreadable count is reported as absent rather than failing the whole response.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CountValue {
    U64(u64),
    I64(i64),
    F64(f64),
    String(String),
    Other(serde_json::Value),
}

/// Parse a count string such as `"1,230,000"` or `" 42 "`.
fn parse_count(raw: &str) -> Option<u64> {
    let digits: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' '))
        .collect();
    digits.parse::<u64>().ok()
}

/// Optional u64 from a number, numeric string, or null.
///
/// Negative, fractional-garbage, or non-numeric values become `None`.
pub fn opt_u64_lenient<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<CountValue>::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(CountValue::U64(v)) => Some(v),
        Some(CountValue::I64(v)) => u64::try_from(v).ok(),
        Some(CountValue::F64(v)) if v.is_finite() && v >= 0.0 => Some(v as u64),
        Some(CountValue::F64(_)) => None,
        Some(CountValue::String(s)) => parse_count(&s),
        Some(CountValue::Other(_)) => None,
    })
}
