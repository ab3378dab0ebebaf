//! Configuration types module

pub mod app;
pub mod cpu;
pub mod logging;
pub mod sources;
pub mod targets;

// Re-export main types
pub use app::AppConfig;
pub use cpu::{CpuMode, CpuSamplerConfig};
pub use logging::LoggingConfig;
pub use sources::SourcesConfig;
pub use targets::{BatteryConfig, DiskConfig};
