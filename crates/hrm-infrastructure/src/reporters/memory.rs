//! Memory reporter over `/proc/meminfo`

use crate::constants::DEFAULT_MEMINFO_PATH;
use crate::procfs::{extract_kb_value, read_pseudo_file};
use hrm_domain::constants::{MEMINFO_AVAILABLE_KEY, MEMINFO_TOTAL_KEY};
use hrm_domain::error::Result;
use hrm_domain::value_objects::MemoryUsage;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reports memory usage from a meminfo formatted file
#[derive(Debug, Clone)]
pub struct MemoryReporter {
    meminfo_path: PathBuf,
}

impl MemoryReporter {
    /// Reporter reading the given meminfo file
    pub fn new<P: AsRef<Path>>(meminfo_path: P) -> Self {
        Self {
            meminfo_path: meminfo_path.as_ref().to_path_buf(),
        }
    }

    /// Current memory usage
    ///
    /// Both values come from a single read, so they are consistent with
    /// each other.
    pub fn usage(&self) -> Result<MemoryUsage> {
        let text = read_pseudo_file(&self.meminfo_path)?;
        usage_from_meminfo(&text)
    }
}

impl Default for MemoryReporter {
    fn default() -> Self {
        Self::new(DEFAULT_MEMINFO_PATH)
    }
}

/// Compute memory usage from meminfo text
pub fn usage_from_meminfo(text: &str) -> Result<MemoryUsage> {
    let available_kib = extract_kb_value(text, MEMINFO_AVAILABLE_KEY)?;
    debug!(available_kib, "Retrieved available memory");

    let total_kib = extract_kb_value(text, MEMINFO_TOTAL_KEY)?;
    debug!(total_kib, "Retrieved total memory");

    let usage = MemoryUsage::from_kib(total_kib, available_kib)?;
    debug!(used_percent = usage.used_percent, "Calculated memory usage");
    Ok(usage)
}
