// AMD processing unit
use std::sync::Arc;
use tracing::{debug, info};

use corebind_core::domain::{UnitKind, Usage};
use corebind_core::port::{MeasurementError, ProcessingUnit, UsageSource};

pub const AMD_ACTIVATION_MESSAGE: &str = "Amd is started";

/// AMD variant, interchangeable with [`crate::IntelUnit`]
pub struct AmdUnit {
    source: Arc<dyn UsageSource>,
}

impl AmdUnit {
    pub fn new(source: Arc<dyn UsageSource>) -> Self {
        Self { source }
    }
}

impl ProcessingUnit for AmdUnit {
    fn kind(&self) -> UnitKind {
        UnitKind::Amd
    }

    fn activation_message(&self) -> &'static str {
        AMD_ACTIVATION_MESSAGE
    }

    fn start(&self) {
        println!("{AMD_ACTIVATION_MESSAGE}");
        info!(unit = %UnitKind::Amd, "Processing unit started");
    }

    fn usage(&self) -> Result<Usage, MeasurementError> {
        let usage = self.source.sample()?;
        debug!(unit = %UnitKind::Amd, usage = %usage, "Usage sampled");
        Ok(usage)
    }
}
