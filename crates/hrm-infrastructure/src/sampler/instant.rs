//! One-shot CPU sampler

use super::{clamp_interval, sample_once};
use async_trait::async_trait;
use hrm_domain::error::Result;
use hrm_domain::ports::{CpuLoadProvider, SharedCpuCounterSource};
use std::time::Duration;

/// Measures CPU load on demand, one sample per read
///
/// No background task and no history; every `cpu_load` call takes one
/// sample interval to return.
pub struct InstantCpuSampler {
    source: SharedCpuCounterSource,
    interval: Duration,
}

impl InstantCpuSampler {
    /// Sampler over `source` waiting `interval` between snapshots
    pub fn new(source: SharedCpuCounterSource, interval: Duration) -> Self {
        Self {
            source,
            interval: clamp_interval(interval),
        }
    }
}

#[async_trait]
impl CpuLoadProvider for InstantCpuSampler {
    async fn cpu_load(&self) -> Result<f64> {
        sample_once(&self.source, self.interval).await
    }

    fn provider_name(&self) -> &'static str {
        "instant"
    }
}
