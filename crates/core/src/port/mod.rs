// Port Layer - Interfaces for external dependencies

pub mod processing_unit;
pub mod usage_source; // For deterministic testing

// Re-exports
pub use processing_unit::ProcessingUnit;
pub use usage_source::{MeasurementError, RandomUsageSource, UsageSource};
