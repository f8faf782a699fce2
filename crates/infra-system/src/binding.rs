//! Binding configuration and assembly
//!
//! Declares which concrete variant satisfies the `ProcessingUnit` capability
//! and builds the `Computer` around it. The basic binding is static and
//! always resolves to Intel.

use std::sync::Arc;
use tracing::info;

use corebind_core::application::Computer;
use corebind_core::domain::UnitKind;
use corebind_core::port::{ProcessingUnit, RandomUsageSource, UsageSource};

use crate::{AmdUnit, IntelUnit};

/// Capability -> variant mapping, evaluated once at assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    unit: UnitKind,
}

impl Binding {
    /// Default wiring: ProcessingUnit -> Intel
    pub const fn basic() -> Self {
        Self {
            unit: UnitKind::Intel,
        }
    }

    /// Bind the capability to a specific variant
    pub const fn to(unit: UnitKind) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> UnitKind {
        self.unit
    }

    /// Construct the bound variant around `source`
    pub fn resolve(&self, source: Arc<dyn UsageSource>) -> Box<dyn ProcessingUnit> {
        match self.unit {
            UnitKind::Intel => Box::new(IntelUnit::new(source)),
            UnitKind::Amd => Box::new(AmdUnit::new(source)),
        }
    }
}

impl Default for Binding {
    fn default() -> Self {
        Self::basic()
    }
}

/// Assemble a computer with the default random usage source
pub fn assemble(binding: &Binding) -> Computer {
    assemble_with_source(binding, Arc::new(RandomUsageSource::from_entropy()))
}

/// Assemble a computer with an injected usage source
pub fn assemble_with_source(binding: &Binding, source: Arc<dyn UsageSource>) -> Computer {
    let unit = binding.resolve(source);

    info!(unit = %binding.unit(), "Processing unit bound");

    Computer::new(unit)
}
