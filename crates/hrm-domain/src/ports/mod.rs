//! Domain Port Interfaces
//!
//! Boundary contracts implemented by the infrastructure layer. Samplers
//! depend on these traits rather than on `/proc` directly, so tests can
//! inject scripted counter sources.

/// CPU counter and CPU load ports
pub mod cpu;

pub use cpu::{CpuCounterSource, CpuLoadProvider, SharedCpuCounterSource, SharedCpuLoadProvider};
