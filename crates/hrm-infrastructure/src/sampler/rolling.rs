//! Rolling CPU load sampler
//!
//! A background tokio task samples back to back and pushes each result into
//! a fixed-size [`LoadHistory`]. Readers get the mean of the whole window.
//!
//! # Lifecycle
//!
//! `Idle` -> `Measuring` on the first [`RollingCpuSampler::start`]. A second
//! start only logs a warning. [`RollingCpuSampler::stop`] cancels the task and
//! moves to `Stopped`; the last window stays readable but sampling cannot
//! resume. Stopping an idle sampler does nothing.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use hrm_domain::ports::CpuLoadProvider;
//! use hrm_infrastructure::procfs::ProcStatSource;
//! use hrm_infrastructure::sampler::RollingCpuSampler;
//!
//! async fn example() -> hrm_domain::Result<f64> {
//!     let sampler = RollingCpuSampler::new(
//!         Arc::new(ProcStatSource::default()),
//!         Duration::from_millis(100),
//!         10,
//!     );
//!     sampler.start();
//!     tokio::time::sleep(Duration::from_secs(1)).await;
//!     sampler.cpu_load().await
//! }
//! ```

use super::{clamp_interval, sample_once};
use async_trait::async_trait;
use hrm_domain::error::{Error, Result};
use hrm_domain::ports::{CpuLoadProvider, SharedCpuCounterSource};
use hrm_domain::value_objects::LoadHistory;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const COMPONENT: &str = "CPU load sampler";

/// Lifecycle state of a rolling sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplerState {
    /// Created, background task not spawned
    Idle,
    /// Background task running
    Measuring,
    /// Background task cancelled
    Stopped,
}

/// CPU sampler with a background task and a rolling window
///
/// Uses `CancellationToken` for shutdown signaling. The history and the
/// state each sit behind their own mutex.
pub struct RollingCpuSampler {
    /// Where counter snapshots come from
    source: SharedCpuCounterSource,

    /// Wait between the two snapshots of one sample
    interval: Duration,

    /// Rolling window, written by the task and read by callers
    history: Arc<Mutex<LoadHistory>>,

    /// Lifecycle state, guards against concurrent starts
    state: Mutex<SamplerState>,

    /// Cancellation token for shutdown signaling
    cancel_token: CancellationToken,

    /// Handle to the background sampling task
    task_handle: Mutex<Option<JoinHandle<()>>>,
}

impl RollingCpuSampler {
    /// Create an idle sampler keeping `history_len` samples
    pub fn new(source: SharedCpuCounterSource, interval: Duration, history_len: usize) -> Self {
        Self {
            source,
            interval: clamp_interval(interval),
            history: Arc::new(Mutex::new(LoadHistory::new(history_len))),
            state: Mutex::new(SamplerState::Idle),
            cancel_token: CancellationToken::new(),
            task_handle: Mutex::new(None),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SamplerState {
        *lock(&self.state)
    }

    /// Whether the background task is running
    pub fn is_measuring(&self) -> bool {
        self.state() == SamplerState::Measuring
    }

    /// Number of successful samples recorded so far
    pub fn samples_taken(&self) -> u64 {
        lock(&self.history).pushed()
    }

    /// Window contents, newest first
    pub fn recent_samples(&self) -> Vec<f64> {
        lock(&self.history).newest_first()
    }

    /// Spawn the background task on the current tokio runtime
    ///
    /// Returns `false` without side effects unless the sampler is idle and a
    /// runtime is available.
    pub fn start(&self) -> bool {
        let mut state = lock(&self.state);
        if *state != SamplerState::Idle {
            warn!(
                state = ?*state,
                "Unable to start CPU load measurement as it is already started"
            );
            return false;
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!(error = %e, "Cannot start CPU load measurement outside a tokio runtime");
                return false;
            }
        };

        let handle = runtime.spawn(sampling_loop(
            Arc::clone(&self.source),
            self.interval,
            Arc::clone(&self.history),
            self.cancel_token.clone(),
        ));
        *lock(&self.task_handle) = Some(handle);
        *state = SamplerState::Measuring;
        true
    }

    /// Cancel the background task and wait for it to exit
    ///
    /// An idle sampler is left idle, so reads keep failing until it starts.
    pub async fn stop(&self) -> Result<()> {
        {
            let mut state = lock(&self.state);
            if *state == SamplerState::Idle {
                debug!("CPU load measurement was never started, nothing to stop");
                return Ok(());
            }
            *state = SamplerState::Stopped;
        }
        self.cancel_token.cancel();

        let handle = lock(&self.task_handle).take();
        if let Some(handle) = handle {
            handle
                .await
                .map_err(|e| Error::internal(format!("CPU sampling task failed: {e}")))?;
        }
        Ok(())
    }

    /// Mean of the rolling window
    ///
    /// Slots not yet written count as zero, so the value reads low until
    /// `history_len` samples have been taken.
    pub fn average_load(&self) -> Result<f64> {
        if self.state() == SamplerState::Idle {
            return Err(Error::not_started(COMPONENT));
        }
        Ok(lock(&self.history).mean())
    }
}

impl Drop for RollingCpuSampler {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

#[async_trait]
impl CpuLoadProvider for RollingCpuSampler {
    async fn cpu_load(&self) -> Result<f64> {
        self.average_load()
    }

    fn start(&self) -> bool {
        RollingCpuSampler::start(self)
    }

    async fn stop(&self) -> Result<()> {
        RollingCpuSampler::stop(self).await
    }

    fn provider_name(&self) -> &'static str {
        "rolling"
    }
}

async fn sampling_loop(
    source: SharedCpuCounterSource,
    interval: Duration,
    history: Arc<Mutex<LoadHistory>>,
    cancel_token: CancellationToken,
) {
    info!(interval = ?interval, "CPU load measurement started");

    loop {
        let outcome = tokio::select! {
            biased;
            () = cancel_token.cancelled() => break,
            outcome = sample_once(&source, interval) => outcome,
        };

        match outcome {
            Ok(load) => {
                let mut window = lock(&history);
                window.push(load);
                debug!(
                    new_measurement = load,
                    measurements = ?window.newest_first(),
                    "Added new measurement"
                );
            }
            Err(e) => {
                error!(error = %e, transient = e.is_transient(), "Failed to measure CPU load");
                tokio::select! {
                    biased;
                    () = cancel_token.cancelled() => break,
                    () = tokio::time::sleep(interval) => {}
                }
            }
        }
    }

    info!("CPU load measurement stopped");
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
