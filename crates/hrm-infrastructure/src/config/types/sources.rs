//! Pseudo-file source locations
//!
//! Overridable so the reporters can be pointed at a container's `/proc`
//! mount or at a fixture tree.

use crate::constants::{DEFAULT_MEMINFO_PATH, DEFAULT_POWER_SUPPLY_DIR, DEFAULT_PROC_STAT_PATH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where metrics are read from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourcesConfig {
    /// meminfo file
    pub meminfo_path: PathBuf,
    /// CPU accounting file
    pub proc_stat_path: PathBuf,
    /// Directory with one entry per power supply
    pub power_supply_dir: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            meminfo_path: PathBuf::from(DEFAULT_MEMINFO_PATH),
            proc_stat_path: PathBuf::from(DEFAULT_PROC_STAT_PATH),
            power_supply_dir: PathBuf::from(DEFAULT_POWER_SUPPLY_DIR),
        }
    }
}
