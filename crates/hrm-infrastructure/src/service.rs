//! Host metrics service
//!
//! Owns one reporter per metric plus the configured CPU load provider, all
//! pointed at the sources named in [`AppConfig`].

use crate::config::AppConfig;
use crate::procfs::ProcStatSource;
use crate::reporters::{BatteryReporter, DiskReporter, MemoryReporter};
use crate::sampler::build_cpu_provider;
use hrm_domain::error::Result;
use hrm_domain::ports::SharedCpuLoadProvider;
use hrm_domain::value_objects::{MemoryUsage, StorageUsage};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Outcome of one metric inside a [`HostSnapshot`]
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Reading<T> {
    /// The metric was read
    Value(T),
    /// Reading failed; the error message
    Error(String),
}

impl<T> From<Result<T>> for Reading<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

impl<T> Reading<T> {
    /// The value, if reading succeeded
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Error(_) => None,
        }
    }
}

/// Every metric gathered at once
///
/// A failing metric is recorded as an error without hiding the others.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HostSnapshot {
    /// Memory usage
    pub memory: Reading<MemoryUsage>,
    /// Usage of the queried filesystem
    pub disk: Reading<StorageUsage>,
    /// CPU load percentage
    pub cpu_load: Reading<f64>,
    /// Battery state of charge
    pub battery_soc: Reading<u32>,
    /// Battery state of health
    pub battery_soh: Reading<u32>,
}

/// Entry point for metric queries
pub struct HostMetrics {
    memory: MemoryReporter,
    disk: DiskReporter,
    battery: BatteryReporter,
    cpu: SharedCpuLoadProvider,
}

impl HostMetrics {
    /// Build reporters and the CPU provider from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let source = Arc::new(ProcStatSource::new(&config.sources.proc_stat_path));
        Self {
            memory: MemoryReporter::new(&config.sources.meminfo_path),
            disk: DiskReporter::new(),
            battery: BatteryReporter::new(&config.sources.power_supply_dir),
            cpu: build_cpu_provider(&config.cpu, source),
        }
    }

    /// Assemble from explicit parts
    pub fn new(
        memory: MemoryReporter,
        disk: DiskReporter,
        battery: BatteryReporter,
        cpu: SharedCpuLoadProvider,
    ) -> Self {
        Self {
            memory,
            disk,
            battery,
            cpu,
        }
    }

    /// Start the CPU provider's background measurement, if it has one
    pub fn start(&self) -> bool {
        self.cpu.start()
    }

    /// Stop the CPU provider's background measurement
    pub async fn stop(&self) -> Result<()> {
        self.cpu.stop().await
    }

    /// Kind of CPU provider in use
    pub fn cpu_provider_name(&self) -> &'static str {
        self.cpu.provider_name()
    }

    /// Current memory usage
    pub fn memory(&self) -> Result<MemoryUsage> {
        self.memory.usage()
    }

    /// Usage of the filesystem holding `path`
    pub fn disk(&self, path: &Path) -> Result<StorageUsage> {
        self.disk.usage(path)
    }

    /// Battery state of charge
    pub fn battery_soc(&self, name: &str) -> Result<u32> {
        self.battery.state_of_charge(name)
    }

    /// Battery state of health
    pub fn battery_soh(&self, name: &str) -> Result<u32> {
        self.battery.state_of_health(name)
    }

    /// CPU load percentage
    pub async fn cpu_load(&self) -> Result<f64> {
        self.cpu.cpu_load().await
    }

    /// Gather every metric
    pub async fn snapshot(&self, disk_path: &Path, battery: &str) -> HostSnapshot {
        HostSnapshot {
            memory: self.memory().into(),
            disk: self.disk(disk_path).into(),
            cpu_load: self.cpu_load().await.into(),
            battery_soc: self.battery_soc(battery).into(),
            battery_soh: self.battery_soh(battery).into(),
        }
    }
}
