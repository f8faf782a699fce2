// Usage Domain Model

use crate::domain::error::{DomainError, Result};

/// Exclusive upper bound of a usage reading (percent)
pub const MAX_USAGE_EXCLUSIVE: u8 = 100;

/// Highest usage (percent, inclusive) still reported as OK
pub const USAGE_OK_THRESHOLD: u8 = 50;

/// Processing unit utilization, an integer percentage in [0, 100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Usage(u8);

impl Usage {
    pub fn new(percent: u8) -> Result<Self> {
        if percent >= MAX_USAGE_EXCLUSIVE {
            return Err(DomainError::InvalidUsage(percent));
        }
        Ok(Self(percent))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// True when the reading is at or below [`USAGE_OK_THRESHOLD`]
    pub fn is_within_threshold(self) -> bool {
        self.0 <= USAGE_OK_THRESHOLD
    }
}

impl std::fmt::Display for Usage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Usage {
    type Error = DomainError;

    fn try_from(percent: u8) -> Result<Self> {
        Self::new(percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_range() {
        for percent in 0..MAX_USAGE_EXCLUSIVE {
            assert_eq!(Usage::new(percent).unwrap().percent(), percent);
        }
    }

    #[test]
    fn test_rejects_hundred_and_above() {
        assert_eq!(Usage::new(100), Err(DomainError::InvalidUsage(100)));
        assert_eq!(Usage::try_from(255u8), Err(DomainError::InvalidUsage(255)));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(Usage::new(50).unwrap().is_within_threshold());
        assert!(!Usage::new(51).unwrap().is_within_threshold());
    }

    #[test]
    fn test_display() {
        assert_eq!(Usage::new(7).unwrap().to_string(), "7%");
    }
}
