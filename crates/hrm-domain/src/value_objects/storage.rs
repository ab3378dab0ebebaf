//! Storage Usage Value Object

use crate::constants::BYTES_PER_GIB;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Value Object: Storage Usage
///
/// Usage of the filesystem mounted at some path. `free_gb` is the space
/// available to non-privileged users, so it excludes blocks reserved for
/// root; this matches what `df` reports.
///
/// ## Example
///
/// ```rust
/// use hrm_domain::value_objects::StorageUsage;
///
/// let usage = StorageUsage::from_blocks(1000, 250, 4096).unwrap();
/// assert_eq!(usage.used_percent, 75.0);
/// assert_eq!(usage.free_percent(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StorageUsage {
    /// Total capacity in gigabytes
    pub total_gb: f64,
    /// Space available to non-root users in gigabytes
    pub free_gb: f64,
    /// Space in use in gigabytes
    pub used_gb: f64,
    /// Percentage of storage in use (0-100)
    pub used_percent: f64,
}

impl StorageUsage {
    /// Build from filesystem block statistics
    ///
    /// `blocks_available` is the non-privileged available count (`f_bavail`).
    #[allow(clippy::cast_precision_loss)]
    pub fn from_blocks(blocks: u64, blocks_available: u64, block_size: u64) -> Result<Self> {
        let total = blocks.saturating_mul(block_size);
        if total == 0 {
            return Err(Error::zero_divisor("total disk size"));
        }
        let free = blocks_available.saturating_mul(block_size);
        let used = total.saturating_sub(free);

        Ok(Self {
            total_gb: total as f64 / BYTES_PER_GIB,
            free_gb: free as f64 / BYTES_PER_GIB,
            used_gb: used as f64 / BYTES_PER_GIB,
            used_percent: used as f64 / total as f64 * 100.0,
        })
    }

    /// Percentage of storage still available (complement of `used_percent`)
    pub fn free_percent(&self) -> f64 {
        100.0 - self.used_percent
    }
}
