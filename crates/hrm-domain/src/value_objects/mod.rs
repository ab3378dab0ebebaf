//! Domain Value Objects
//!
//! Immutable results of one metric query, plus the CPU accounting types the
//! samplers compute with.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`MemoryUsage`] | Total/available/used memory in GB |
//! | [`StorageUsage`] | Total/free/used space of a filesystem in GB |
//! | [`CpuTimes`] | Aggregate CPU counters from one `/proc/stat` read |
//! | [`LoadHistory`] | Rolling window of CPU load samples |

/// CPU counter snapshots and load history
pub mod cpu;
/// Memory usage value object
pub mod memory;
/// Filesystem usage value object
pub mod storage;

pub use cpu::{CpuTimes, LoadHistory};
pub use memory::MemoryUsage;
pub use storage::StorageUsage;
