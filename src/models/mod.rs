//! Report models
//!
//! Serializable snapshots produced by the capability-report binary.

pub mod report;

pub use report::CapabilityReport;
