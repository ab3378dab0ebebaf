//! Pseudo-file reader
//!
//! Every read is a fresh, uncached read. Errors name the path.

use crate::error_ext::ErrorContext;
use hrm_domain::error::{Error, Result};
use std::path::Path;
use tracing::{debug, error};

/// Read the full text of a pseudo-file
pub fn read_pseudo_file(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), bytes = text.len(), "Read pseudo-file");
            Ok(text)
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to read pseudo-file");
            Err(Error::io_with_source(
                format!("failed to read {}: {}", path.display(), e),
                e,
            ))
        }
    }
}

/// Read a file holding a single non-negative integer, such as a sysfs attribute
pub fn read_int_file(path: &Path) -> Result<u64> {
    let text = read_pseudo_file(path)?;
    text.trim()
        .parse::<u64>()
        .parse_context(format!("failed to parse integer at {}", path.display()))
}
