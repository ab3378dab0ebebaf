//! Value extractor for `Key: value kB` formatted text

use crate::error_ext::ErrorContext;
use hrm_domain::error::{Error, Result};
use regex::Regex;

/// Extract the kB value labeled `key` from meminfo-style text
///
/// Matches `<key>:\s*(\d+) kB`. Fails with `NotFound` when no line matches
/// and with `Parse` when the digits do not fit in a `u64`.
pub fn extract_kb_value(text: &str, key: &str) -> Result<u64> {
    let pattern = format!(r"{}:\s*(\d+) kB", regex::escape(key));
    let re = Regex::new(&pattern).context(format!("invalid pattern for key {key}"))?;

    let digits = re
        .captures(text)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| Error::not_found(format!("{key} in meminfo")))?;

    digits
        .as_str()
        .parse::<u64>()
        .parse_context(format!("failed to parse {key} value"))
}
