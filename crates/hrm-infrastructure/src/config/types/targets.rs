//! Default query targets

use crate::constants::{DEFAULT_BATTERY_NAME, DEFAULT_DISK_PATH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Disk query defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiskConfig {
    /// Path queried when none is given
    pub default_path: PathBuf,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from(DEFAULT_DISK_PATH),
        }
    }
}

/// Battery query defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BatteryConfig {
    /// Battery queried when none is given
    pub default_name: String,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_BATTERY_NAME.to_string(),
        }
    }
}
