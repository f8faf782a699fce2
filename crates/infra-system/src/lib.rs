// corebind Infrastructure - System Adapters
// Implements: ProcessingUnit (Intel, AMD), UsageSource (host CPU), binding configuration

pub mod amd_unit;
pub mod binding;
pub mod host_cpu_usage;
pub mod intel_unit;

pub use amd_unit::AmdUnit;
pub use binding::{assemble, assemble_with_source, Binding};
pub use host_cpu_usage::HostCpuUsage;
pub use intel_unit::IntelUnit;
