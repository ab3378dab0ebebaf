//! Domain layer constants
//!
//! Units and defaults that are part of how metrics are computed. Source
//! locations and other infrastructure defaults live in
//! `hrm_infrastructure::constants`.

// ============================================================================
// UNIT CONSTANTS
// ============================================================================

/// Kibibytes per gibibyte (meminfo reports kB, results are in GB)
pub const KIB_PER_GIB: f64 = 1024.0 * 1024.0;

/// Bytes per gibibyte
pub const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

// ============================================================================
// MEMINFO CONSTANTS
// ============================================================================

/// meminfo key holding total usable RAM
pub const MEMINFO_TOTAL_KEY: &str = "MemTotal";

/// meminfo key holding memory available for new workloads
pub const MEMINFO_AVAILABLE_KEY: &str = "MemAvailable";

// ============================================================================
// CPU SAMPLING CONSTANTS
// ============================================================================

/// Default wait between the two counter snapshots of one sample (ms)
pub const CPU_SAMPLE_INTERVAL_MS: u64 = 100;

/// Default number of samples kept by the rolling sampler
pub const CPU_HISTORY_LEN: usize = 10;

/// Label of the aggregate line in `/proc/stat`
pub const PROC_STAT_AGGREGATE_LABEL: &str = "cpu";

/// Minimum number of counter fields after the label (user..idle)
pub const CPU_FIELDS_MIN: usize = 4;

/// Maximum number of counter fields after the label (user..guest_nice)
pub const CPU_FIELDS_MAX: usize = 10;

/// Zero-based index of the idle field among the counter fields
pub const CPU_IDLE_FIELD: usize = 3;

/// Zero-based index of the iowait field among the counter fields
pub const CPU_IOWAIT_FIELD: usize = 4;

// ============================================================================
// BATTERY CONSTANTS
// ============================================================================

/// sysfs attribute holding the state of charge in percent
pub const BATTERY_CAPACITY_ATTR: &str = "capacity";

/// sysfs attribute holding the current full-charge energy
pub const BATTERY_ENERGY_FULL_ATTR: &str = "energy_full";

/// sysfs attribute holding the design full-charge energy
pub const BATTERY_ENERGY_FULL_DESIGN_ATTR: &str = "energy_full_design";
