//! # hrm
//!
//! Host resource metrics for Linux: memory usage, CPU load, disk usage and
//! battery state, read from `/proc`, `/sys` and `statvfs(3)`.
//!
//! This crate is the public facade. It re-exports the domain and
//! infrastructure layers and hosts the `hrm` command-line binary.
//!
//! ## Example
//!
//! ```no_run
//! use hrm::infrastructure::{AppConfig, HostMetrics};
//!
//! # async fn example() -> hrm::Result<()> {
//! let metrics = HostMetrics::from_config(&AppConfig::default());
//! println!("{:.1}% memory used", metrics.memory()?.used_percent);
//!
//! metrics.start();
//! tokio::time::sleep(std::time::Duration::from_secs(1)).await;
//! println!("{:.1}% CPU", metrics.cpu_load().await?);
//! metrics.stop().await
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, errors and ports; no I/O
//! - `infrastructure` - readers, reporters, samplers, config, logging
//! - `cli` - argument parsing and command dispatch for the binary

/// Domain layer - value objects, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use hrm_domain::*;
}

/// Infrastructure layer - reporters, samplers, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use hrm_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the main entry point at the crate root
pub use infrastructure::HostMetrics;
