//! Computer - the composed root object
//!
//! Owns exactly one processing unit, injected at construction and never
//! replaced. Lifecycle: NotStarted -> Started (terminal).

use crate::domain::{PowerState, Status, UnitKind};
use crate::port::ProcessingUnit;
use tracing::{debug, info, warn};

/// Computer composed around an injected processing unit
pub struct Computer {
    unit: Box<dyn ProcessingUnit>,
    power: PowerState,
}

impl Computer {
    /// Create a computer that exclusively owns `unit`
    ///
    /// # Example
    /// ```text
    /// let computer = Computer::new(Box::new(IntelUnit::new(source)));
    /// ```
    pub fn new(unit: Box<dyn ProcessingUnit>) -> Self {
        Self {
            unit,
            power: PowerState::NotStarted,
        }
    }

    pub fn unit_kind(&self) -> UnitKind {
        self.unit.kind()
    }

    pub fn power_state(&self) -> PowerState {
        self.power
    }

    /// Activate the processing unit
    ///
    /// Started is terminal; calling this again does not re-activate the unit.
    pub fn start(&mut self) {
        if self.power == PowerState::Started {
            debug!(unit = %self.unit.kind(), "Computer already started");
            return;
        }

        self.unit.start();
        self.power = PowerState::Started;

        info!(unit = %self.unit.kind(), "Computer started");
    }

    /// Take one usage reading and turn it into a verdict
    ///
    /// No precondition on [`Computer::start`]; reading before activation is allowed.
    pub fn status(&self) -> crate::Result<Status> {
        let usage = self.unit.usage()?;
        let status = Status::from_usage(usage);

        debug!(
            unit = %self.unit.kind(),
            usage = %usage,
            power = %self.power,
            status = %status,
            "Status checked"
        );

        Ok(status)
    }

    /// True iff usage <= 50
    ///
    /// A failed reading counts as not OK.
    pub fn is_status_ok(&self) -> bool {
        match self.status() {
            Ok(status) => status.is_ok(),
            Err(e) => {
                warn!(unit = %self.unit.kind(), error = %e, "Usage reading failed");
                false
            }
        }
    }

    /// Line printed by the entry point (`Status:OK` / `Status:Not OK`)
    pub fn report_line(&self) -> String {
        Status::from(self.is_status_ok()).report_line()
    }
}

impl std::fmt::Debug for Computer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Computer")
            .field("unit", &self.unit.kind())
            .field("power", &self.power)
            .finish()
    }
}
