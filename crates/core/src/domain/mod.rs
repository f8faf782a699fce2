// Domain Layer - Pure value types

pub mod error;
pub mod status;
pub mod unit;
pub mod usage;

// Re-exports
pub use error::DomainError;
pub use status::Status;
pub use unit::{PowerState, UnitKind};
pub use usage::{Usage, MAX_USAGE_EXCLUSIVE, USAGE_OK_THRESHOLD};
