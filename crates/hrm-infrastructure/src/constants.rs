//! Infrastructure layer constants
//!
//! Default source locations and configuration names. Units and sampling
//! defaults are defined in `hrm_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "hrm.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "hrm";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "HRM";

/// Separator between nested keys in environment variables (`HRM_CPU__MODE`)
pub const CONFIG_ENV_NESTING_SEPARATOR: &str = "__";

// ============================================================================
// PSEUDO-FILESYSTEM CONSTANTS
// ============================================================================

/// Kernel memory statistics
pub const DEFAULT_MEMINFO_PATH: &str = "/proc/meminfo";

/// Kernel CPU time accounting
pub const DEFAULT_PROC_STAT_PATH: &str = "/proc/stat";

/// Directory holding one subdirectory per power supply
pub const DEFAULT_POWER_SUPPLY_DIR: &str = "/sys/class/power_supply";

/// Mount path queried when none is given
pub const DEFAULT_DISK_PATH: &str = "/";

/// Battery queried when none is given
pub const DEFAULT_BATTERY_NAME: &str = "BAT0";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "HRM_LOG";

/// File stem used for rolling log files when none can be derived
pub const DEFAULT_LOG_FILE_STEM: &str = "hrm";

// ============================================================================
// CLI CONSTANTS
// ============================================================================

/// Default delay between snapshots printed by `hrm watch` (ms)
pub const WATCH_DEFAULT_INTERVAL_MS: u64 = 1000;
