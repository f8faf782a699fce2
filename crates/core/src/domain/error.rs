// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid usage: {0}% (must be below 100)")]
    InvalidUsage(u8),
}

pub type Result<T> = std::result::Result<T, DomainError>;
