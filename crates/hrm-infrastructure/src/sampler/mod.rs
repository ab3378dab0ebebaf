//! CPU load samplers
//!
//! | Sampler | Behaviour |
//! |---------|-----------|
//! | [`RollingCpuSampler`] | Background task keeps a rolling window, reads return its mean |
//! | [`InstantCpuSampler`] | Each read blocks for one sample interval |
//!
//! Both measure the same way: two counter snapshots one interval apart,
//! load = busy share of the elapsed jiffies.

pub mod instant;
pub mod rolling;

pub use instant::InstantCpuSampler;
pub use rolling::{RollingCpuSampler, SamplerState};

use crate::config::{CpuMode, CpuSamplerConfig};
use hrm_domain::error::{Error, Result};
use hrm_domain::ports::{SharedCpuCounterSource, SharedCpuLoadProvider};
use hrm_domain::value_objects::CpuTimes;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Shortest wait allowed between two snapshots
const MIN_SAMPLE_INTERVAL: Duration = Duration::from_millis(1);

/// Take one sample: snapshot, wait `interval`, snapshot again
///
/// Counter reads are file I/O and run on the blocking pool.
pub async fn sample_once(source: &SharedCpuCounterSource, interval: Duration) -> Result<f64> {
    let before = read_counters(source).await?;
    tokio::time::sleep(interval).await;
    let after = read_counters(source).await?;

    let load = before.load_until(&after)?;
    debug!(cpu_load_percent = load, "Calculated CPU load over interval");
    Ok(load)
}

/// Build the CPU load provider selected by configuration
pub fn build_cpu_provider(
    config: &CpuSamplerConfig,
    source: SharedCpuCounterSource,
) -> SharedCpuLoadProvider {
    let interval = config.sample_interval();
    match config.mode {
        CpuMode::Rolling => Arc::new(RollingCpuSampler::new(
            source,
            interval,
            config.history_len,
        )),
        CpuMode::Instant => Arc::new(InstantCpuSampler::new(source, interval)),
    }
}

async fn read_counters(source: &SharedCpuCounterSource) -> Result<CpuTimes> {
    let source = Arc::clone(source);
    tokio::task::spawn_blocking(move || source.read_counters())
        .await
        .map_err(|e| Error::internal(format!("CPU counter read task failed: {e}")))
        .and_then(|res| res)
}

fn clamp_interval(interval: Duration) -> Duration {
    interval.max(MIN_SAMPLE_INTERVAL)
}
