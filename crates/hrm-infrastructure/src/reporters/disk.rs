//! Disk reporter over `statvfs(3)`

use crate::error_ext::ErrorContext;
use hrm_domain::error::Result;
use hrm_domain::value_objects::StorageUsage;
use nix::sys::statvfs::statvfs;
use std::path::Path;
use tracing::{debug, error};

/// Reports usage of the filesystem a path lives on
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskReporter;

impl DiskReporter {
    /// Create a disk reporter
    pub fn new() -> Self {
        Self
    }

    /// Usage of the filesystem mounted at (or containing) `path`
    ///
    /// Free space is what non-privileged users can allocate (`f_bavail`).
    #[allow(clippy::unnecessary_cast)]
    pub fn usage(&self, path: &Path) -> Result<StorageUsage> {
        let stat = statvfs(path)
            .inspect_err(|e| error!(path = %path.display(), error = %e, "Failed to get disk data"))
            .with_io_context(|| format!("failed to stat filesystem at {}", path.display()))?;

        let usage = StorageUsage::from_blocks(
            stat.blocks() as u64,
            stat.blocks_available() as u64,
            stat.fragment_size() as u64,
        )?;

        debug!(
            path = %path.display(),
            total_gb = usage.total_gb,
            used_percent = usage.used_percent,
            "Got disk usage"
        );
        Ok(usage)
    }
}
