// Counter extraction for labels such as "See More (24)"

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static COUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\)").expect("count pattern is valid"));

/// Extracts the integer from the first `(<digits>)` group in `text`.
///
/// Fails with [`Error::CountNotFound`] when no such group exists or the
/// digits do not fit in a `u32`.
pub fn extract_count(text: &str) -> Result<u32> {
    COUNT_PATTERN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
        .ok_or_else(|| Error::CountNotFound(text.to_string()))
}
