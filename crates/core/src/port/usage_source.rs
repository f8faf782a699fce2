// Usage Source Port (injectable randomness / hardware probe)
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

use crate::domain::{Usage, MAX_USAGE_EXCLUSIVE};

/// Usage measurement errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    #[error("Usage reading out of range: {0}")]
    OutOfRange(f32),

    #[error("Usage probe unavailable: {0}")]
    Unavailable(String),
}

/// Source of usage readings for a processing unit
///
/// Every call draws a fresh reading; callers must not assume determinism
/// unless they injected a deterministic source.
pub trait UsageSource: Send + Sync {
    /// Take one reading in [0, 100)
    fn sample(&self) -> Result<Usage, MeasurementError>;
}

/// Uniform random usage source (production default)
pub struct RandomUsageSource {
    rng: Mutex<StdRng>,
}

impl RandomUsageSource {
    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fixed seed, reproducible sequence
    ///
    /// # Example
    /// ```text
    /// let source = RandomUsageSource::seeded(42);
    /// let usage = source.sample()?;
    /// ```
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomUsageSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl UsageSource for RandomUsageSource {
    fn sample(&self) -> Result<Usage, MeasurementError> {
        // A panic mid-draw leaves the generator usable
        let percent = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..MAX_USAGE_EXCLUSIVE);

        Usage::new(percent).map_err(|_| MeasurementError::OutOfRange(f32::from(percent)))
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::atomic::{AtomicU8, Ordering};

    /// Always returns the configured percentage
    pub struct FixedUsageSource {
        percent: AtomicU8,
    }

    impl FixedUsageSource {
        pub fn new(percent: u8) -> Self {
            Self {
                percent: AtomicU8::new(percent),
            }
        }

        pub fn set_usage(&self, percent: u8) {
            self.percent.store(percent, Ordering::SeqCst);
        }
    }

    impl UsageSource for FixedUsageSource {
        fn sample(&self) -> Result<Usage, MeasurementError> {
            let percent = self.percent.load(Ordering::SeqCst);
            Usage::new(percent).map_err(|_| MeasurementError::OutOfRange(f32::from(percent)))
        }
    }

    /// Always fails, standing in for a broken hardware probe
    pub struct FailingUsageSource {
        reason: String,
    }

    impl FailingUsageSource {
        pub fn new(reason: impl Into<String>) -> Self {
            Self {
                reason: reason.into(),
            }
        }
    }

    impl UsageSource for FailingUsageSource {
        fn sample(&self) -> Result<Usage, MeasurementError> {
            Err(MeasurementError::Unavailable(self.reason.clone()))
        }
    }
}
