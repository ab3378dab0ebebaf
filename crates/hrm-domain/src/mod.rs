//! # Domain Layer
//!
//! Core types for host resource metrics: the values each query returns,
//! the error taxonomy, and the ports samplers are built against. No I/O
//! happens in this crate.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | `MemoryUsage`, `StorageUsage`, `CpuTimes`, `LoadHistory` |
//! | [`ports`] | `CpuCounterSource`, `CpuLoadProvider` |
//! | [`error`] | `Error` and `Result` |
//! | [`constants`] | Units, meminfo keys, sampling defaults |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{CpuCounterSource, CpuLoadProvider};
pub use value_objects::{CpuTimes, LoadHistory, MemoryUsage, StorageUsage};
