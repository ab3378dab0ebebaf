//! # Infrastructure Layer
//!
//! Everything that touches the host: pseudo-file reads, `statvfs`, the CPU
//! sampling task, plus configuration and logging.
//!
//! ## Module Categories
//!
//! ### Metric Sources
//! | Module | Description |
//! |--------|-------------|
//! | [`procfs`] | Pseudo-file reader, `kB` value extractor, `/proc/stat` counter source |
//! | [`reporters`] | Memory, disk and battery reporters |
//! | [`sampler`] | Rolling and instant CPU load samplers |
//! | [`service`] | `HostMetrics`, one handle over all of the above |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`constants`] | Default paths and names |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers for domain errors |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod procfs;
pub mod reporters;
pub mod sampler;
pub mod service;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use service::{HostMetrics, HostSnapshot, Reading};
