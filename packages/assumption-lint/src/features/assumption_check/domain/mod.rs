//! Assumption check domain models

mod stats;
mod violation;

pub use stats::CheckStats;
pub use violation::ViolationReport;
