//! A1 range construction for the values API.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters encoded when a range is placed in a URL path segment.
///
/// `'` and `!` stay literal since they are part of A1 notation.
const RANGE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b':')
    .add(b'[')
    .add(b']');

/// A1 range anchoring an append at the top-left of a worksheet, e.g. `'Sheet1'!A1`.
///
/// Single quotes inside the title are doubled.
pub fn append_anchor(worksheet_title: &str) -> String {
    format!("'{}'!A1", worksheet_title.replace('\'', "''"))
}

/// Percent-encode a range for use as a URL path segment.
pub fn encode_range(range: &str) -> String {
    percent_encode(range.as_bytes(), RANGE_ENCODE_SET).to_string()
}
