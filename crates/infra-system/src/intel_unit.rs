// Intel processing unit
use std::sync::Arc;
use tracing::{debug, info};

use corebind_core::domain::{UnitKind, Usage};
use corebind_core::port::{MeasurementError, ProcessingUnit, UsageSource};

pub const INTEL_ACTIVATION_MESSAGE: &str = "Intel is started.";

/// Intel variant, reads usage from the injected source
pub struct IntelUnit {
    source: Arc<dyn UsageSource>,
}

impl IntelUnit {
    pub fn new(source: Arc<dyn UsageSource>) -> Self {
        Self { source }
    }
}

impl ProcessingUnit for IntelUnit {
    fn kind(&self) -> UnitKind {
        UnitKind::Intel
    }

    fn activation_message(&self) -> &'static str {
        INTEL_ACTIVATION_MESSAGE
    }

    fn start(&self) {
        println!("{INTEL_ACTIVATION_MESSAGE}");
        info!(unit = %UnitKind::Intel, "Processing unit started");
    }

    fn usage(&self) -> Result<Usage, MeasurementError> {
        let usage = self.source.sample()?;
        debug!(unit = %UnitKind::Intel, usage = %usage, "Usage sampled");
        Ok(usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corebind_core::port::usage_source::mocks::{FailingUsageSource, FixedUsageSource};

    #[test]
    fn test_identity() {
        let unit = IntelUnit::new(Arc::new(FixedUsageSource::new(0)));
        assert_eq!(unit.kind(), UnitKind::Intel);
        assert_eq!(unit.activation_message(), "Intel is started.");
    }

    #[test]
    fn test_usage_comes_from_source() {
        let source = Arc::new(FixedUsageSource::new(12));
        let unit = IntelUnit::new(source.clone());
        assert_eq!(unit.usage().unwrap().percent(), 12);

        source.set_usage(77);
        assert_eq!(unit.usage().unwrap().percent(), 77);
    }

    #[test]
    fn test_usage_error_propagates() {
        let unit = IntelUnit::new(Arc::new(FailingUsageSource::new("no sensor")));
        assert!(matches!(unit.usage(), Err(MeasurementError::Unavailable(_))));
    }
}
