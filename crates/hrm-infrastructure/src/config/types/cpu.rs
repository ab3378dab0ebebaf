//! CPU sampler configuration types

use hrm_domain::constants::{CPU_HISTORY_LEN, CPU_SAMPLE_INTERVAL_MS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How CPU load is measured
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CpuMode {
    /// Background task averaging a rolling window
    #[default]
    Rolling,
    /// One blocking sample per read
    Instant,
}

/// CPU sampler configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CpuSamplerConfig {
    /// Sampler kind
    pub mode: CpuMode,
    /// Wait between the two snapshots of one sample (ms)
    pub sample_interval_ms: u64,
    /// Samples averaged by the rolling sampler
    pub history_len: usize,
}

impl CpuSamplerConfig {
    /// Sample interval as a `Duration`
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    /// Time until a rolling sampler's window is full
    pub fn warmup(&self) -> Duration {
        self.sample_interval() * u32::try_from(self.history_len).unwrap_or(u32::MAX)
    }
}

impl Default for CpuSamplerConfig {
    fn default() -> Self {
        Self {
            mode: CpuMode::default(),
            sample_interval_ms: CPU_SAMPLE_INTERVAL_MS,
            history_len: CPU_HISTORY_LEN,
        }
    }
}
