//! CPU Accounting Value Objects
//!
//! Counter snapshots taken from `/proc/stat`, the load computed between two
//! of them, and the rolling history the background sampler averages over.

use crate::constants::{
    CPU_FIELDS_MAX, CPU_FIELDS_MIN, CPU_IDLE_FIELD, CPU_IOWAIT_FIELD, PROC_STAT_AGGREGATE_LABEL,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Value Object: CPU Time Snapshot
///
/// Aggregate CPU time counters (in jiffies) at one instant.
///
/// ## Business Rules
///
/// - `total` is the sum of every counter field present
/// - `idle` is idle + iowait; steal time counts as busy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CpuTimes {
    /// Sum of all counter fields
    pub total: u64,
    /// Idle plus iowait time
    pub idle: u64,
}

impl CpuTimes {
    /// Parse the aggregate `cpu ` line out of full `/proc/stat` text
    pub fn from_proc_stat(text: &str) -> Result<Self> {
        let line = text
            .lines()
            .find(|line| {
                line.strip_prefix(PROC_STAT_AGGREGATE_LABEL)
                    .is_some_and(|rest| rest.starts_with(char::is_whitespace))
            })
            .ok_or_else(|| Error::parse("no aggregate cpu line in /proc/stat"))?;

        Self::from_cpu_line(line)
    }

    /// Parse a single aggregate line, e.g. `cpu  100 0 100 700 100 0 0 0 0 0`
    pub fn from_cpu_line(line: &str) -> Result<Self> {
        let mut fields = line.split_whitespace();
        if fields.next() != Some(PROC_STAT_AGGREGATE_LABEL) {
            return Err(Error::parse(format!("not an aggregate cpu line: {line}")));
        }

        let counters: Vec<&str> = fields.collect();
        if !(CPU_FIELDS_MIN..=CPU_FIELDS_MAX).contains(&counters.len()) {
            return Err(Error::parse(format!(
                "unexpected number of CPU fields ({}), cpu line: {line}",
                counters.len()
            )));
        }

        let mut times = Self::default();
        for (index, raw) in counters.iter().enumerate() {
            let value: u64 = raw.parse().map_err(|e| {
                Error::parse(format!("failed to parse CPU field {}: {e}", index + 1))
            })?;
            times.total = times.total.saturating_add(value);
            if index == CPU_IDLE_FIELD || index == CPU_IOWAIT_FIELD {
                times.idle = times.idle.saturating_add(value);
            }
        }

        Ok(times)
    }

    /// Load percentage over the window from `self` to the later snapshot `later`
    ///
    /// Fails with [`Error::NoCpuActivity`] when no time elapsed between the two.
    #[allow(clippy::cast_precision_loss)]
    pub fn load_until(&self, later: &Self) -> Result<f64> {
        let total_diff = later.total.saturating_sub(self.total);
        if total_diff == 0 {
            return Err(Error::NoCpuActivity);
        }
        let idle_diff = later.idle.saturating_sub(self.idle).min(total_diff);

        let load = 100.0 * (total_diff - idle_diff) as f64 / total_diff as f64;
        Ok(load.clamp(0.0, 100.0))
    }
}

/// Rolling window of CPU load samples
///
/// Fixed capacity ring buffer. The mean is taken over every slot, so slots
/// that were never written count as zero until the window fills.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadHistory {
    slots: Vec<f64>,
    cursor: usize,
    pushed: u64,
}

impl LoadHistory {
    /// Create an empty history holding `capacity` samples
    ///
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0.0; capacity.max(1)],
            cursor: 0,
            pushed: 0,
        }
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Total number of samples ever pushed
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    /// Whether every slot holds a real sample
    pub fn is_full(&self) -> bool {
        self.pushed >= self.slots.len() as u64
    }

    /// Record a sample, evicting the oldest one
    pub fn push(&mut self, sample: f64) {
        self.slots[self.cursor] = sample;
        self.cursor = (self.cursor + 1) % self.slots.len();
        self.pushed += 1;
    }

    /// Arithmetic mean over all slots
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        self.slots.iter().sum::<f64>() / self.slots.len() as f64
    }

    /// Samples ordered newest first, unwritten slots included as zero
    pub fn newest_first(&self) -> Vec<f64> {
        let len = self.slots.len();
        (1..=len)
            .map(|back| self.slots[(self.cursor + len - back) % len])
            .collect()
    }
}
