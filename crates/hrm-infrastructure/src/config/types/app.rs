//! Main application configuration

use super::{BatteryConfig, CpuSamplerConfig, DiskConfig, LoggingConfig, SourcesConfig};
use serde::{Deserialize, Serialize};

/// Root of the `hrm.toml` configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Pseudo-file locations
    pub sources: SourcesConfig,
    /// CPU sampler configuration
    pub cpu: CpuSamplerConfig,
    /// Disk query defaults
    pub disk: DiskConfig,
    /// Battery query defaults
    pub battery: BatteryConfig,
}
