//! Memory Usage Value Object

use crate::constants::KIB_PER_GIB;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Value Object: Memory Usage
///
/// Point-in-time memory figures derived from one meminfo read.
///
/// ## Business Rules
///
/// - `used_gb = total_gb - available_gb`
/// - `used_percent = 100 * used_gb / total_gb`
/// - Total must be non-zero
///
/// ## Example
///
/// ```rust
/// use hrm_domain::value_objects::MemoryUsage;
///
/// let usage = MemoryUsage::from_kib(8_000_000, 2_000_000).unwrap();
/// assert_eq!(usage.used_percent, 75.0);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MemoryUsage {
    /// Total memory in gigabytes
    pub total_gb: f64,
    /// Memory available for new workloads in gigabytes
    pub available_gb: f64,
    /// Memory in use in gigabytes
    pub used_gb: f64,
    /// Percentage of memory in use (0-100)
    pub used_percent: f64,
}

impl MemoryUsage {
    /// Build from meminfo's `MemTotal` and `MemAvailable` values (kB)
    #[allow(clippy::cast_precision_loss)]
    pub fn from_kib(total_kib: u64, available_kib: u64) -> Result<Self> {
        if total_kib == 0 {
            return Err(Error::zero_divisor("total memory"));
        }

        let total_gb = total_kib as f64 / KIB_PER_GIB;
        let available_gb = available_kib as f64 / KIB_PER_GIB;
        let used_gb = total_gb - available_gb;
        let used_percent = 100.0 * (total_kib as f64 - available_kib as f64) / total_kib as f64;

        Ok(Self {
            total_gb,
            available_gb,
            used_gb,
            used_percent,
        })
    }
}
