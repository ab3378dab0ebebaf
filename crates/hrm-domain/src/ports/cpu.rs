//! CPU Sampling Ports
//!
//! Defines where CPU counters come from and how CPU load is read.

use crate::error::Result;
use crate::value_objects::CpuTimes;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of aggregate CPU counter snapshots
pub trait CpuCounterSource: Send + Sync {
    /// Read one snapshot of the aggregate counters
    fn read_counters(&self) -> Result<CpuTimes>;
}

/// Shared counter source
pub type SharedCpuCounterSource = Arc<dyn CpuCounterSource>;

/// CPU load reader interface
///
/// Implemented by the rolling background sampler and by the one-shot
/// instant sampler.
#[async_trait]
pub trait CpuLoadProvider: Send + Sync {
    /// Current CPU load percentage (0-100)
    async fn cpu_load(&self) -> Result<f64>;

    /// Begin background measurement, if the provider has any.
    ///
    /// Returns `true` only when this call actually started something.
    fn start(&self) -> bool {
        false
    }

    /// Stop background measurement and wait for it to finish
    async fn stop(&self) -> Result<()> {
        Ok(())
    }

    /// Provider name for logging
    fn provider_name(&self) -> &'static str;
}

/// Shared CPU load provider
pub type SharedCpuLoadProvider = Arc<dyn CpuLoadProvider>;
