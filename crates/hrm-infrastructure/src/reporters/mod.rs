//! One-shot metric reporters
//!
//! Each query re-reads its source; no reporter keeps state between calls.

pub mod battery;
pub mod disk;
pub mod memory;

pub use battery::BatteryReporter;
pub use disk::DiskReporter;
pub use memory::MemoryReporter;
