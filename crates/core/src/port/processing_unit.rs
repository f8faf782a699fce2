// Processing Unit Port (the CPU capability a Computer depends on)
use crate::domain::{UnitKind, Usage};
use crate::port::MeasurementError;
use std::sync::Arc;

/// Processing unit capability
///
/// Bound to a concrete variant (Intel, AMD) at assembly time.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessingUnit: Send + Sync {
    /// Which variant this is
    fn kind(&self) -> UnitKind;

    /// Message emitted on activation
    fn activation_message(&self) -> &'static str;

    /// Activation signal
    ///
    /// Emits the activation message. Never fails.
    fn start(&self);

    /// Current utilization
    ///
    /// # Returns
    /// A fresh reading in [0, 100) on every call
    fn usage(&self) -> Result<Usage, MeasurementError>;
}

/// Shared units (a caller may keep a handle on the unit it injected)
impl<T: ProcessingUnit + ?Sized> ProcessingUnit for Arc<T> {
    fn kind(&self) -> UnitKind {
        (**self).kind()
    }

    fn activation_message(&self) -> &'static str {
        (**self).activation_message()
    }

    fn start(&self) {
        (**self).start()
    }

    fn usage(&self) -> Result<Usage, MeasurementError> {
        (**self).usage()
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

    pub const STUB_ACTIVATION_MESSAGE: &str = "Stub is started";

    /// Stub unit with a settable usage that counts activations
    pub struct StubProcessingUnit {
        usage_percent: AtomicU8,
        starts: AtomicUsize,
    }

    impl StubProcessingUnit {
        pub fn new(usage_percent: u8) -> Self {
            Self {
                usage_percent: AtomicU8::new(usage_percent),
                starts: AtomicUsize::new(0),
            }
        }

        pub fn set_usage(&self, usage_percent: u8) {
            self.usage_percent.store(usage_percent, Ordering::SeqCst);
        }

        pub fn start_count(&self) -> usize {
            self.starts.load(Ordering::SeqCst)
        }
    }

    impl ProcessingUnit for StubProcessingUnit {
        fn kind(&self) -> UnitKind {
            UnitKind::Intel
        }

        fn activation_message(&self) -> &'static str {
            STUB_ACTIVATION_MESSAGE
        }

        fn start(&self) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn usage(&self) -> Result<Usage, MeasurementError> {
            let percent = self.usage_percent.load(Ordering::SeqCst);
            Usage::new(percent).map_err(|_| MeasurementError::OutOfRange(f32::from(percent)))
        }
    }
}
