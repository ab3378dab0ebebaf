//! `/proc/stat` counter source

use super::reader::read_pseudo_file;
use crate::constants::DEFAULT_PROC_STAT_PATH;
use hrm_domain::error::Result;
use hrm_domain::ports::CpuCounterSource;
use hrm_domain::value_objects::CpuTimes;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads aggregate CPU counters from a `/proc/stat` formatted file
#[derive(Debug, Clone)]
pub struct ProcStatSource {
    path: PathBuf,
}

impl ProcStatSource {
    /// Source reading the given file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path this source reads
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ProcStatSource {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_STAT_PATH)
    }
}

impl CpuCounterSource for ProcStatSource {
    fn read_counters(&self) -> Result<CpuTimes> {
        let text = read_pseudo_file(&self.path)?;
        let times = CpuTimes::from_proc_stat(&text)?;
        debug!(total = times.total, idle = times.idle, "Read CPU counters");
        Ok(times)
    }
}
