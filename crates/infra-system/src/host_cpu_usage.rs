// Host CPU usage source
// reason: sysinfo for cross-platform CPU monitoring, a real probe behind the UsageSource port
use std::sync::{Mutex, PoisonError};
use sysinfo::System;
use tracing::debug;

use corebind_core::domain::{Usage, MAX_USAGE_EXCLUSIVE};
use corebind_core::port::{MeasurementError, UsageSource};

/// Usage source reading the host's global CPU usage via sysinfo
///
/// Each sample reports usage since the previous refresh. Not bound by the
/// basic binding; inject it with `assemble_with_source`.
pub struct HostCpuUsage {
    system: Mutex<System>,
}

impl HostCpuUsage {
    /// Create a probe and take the baseline refresh
    ///
    /// # Example
    /// ```ignore
    /// let source = Arc::new(HostCpuUsage::new());
    /// let computer = assemble_with_source(&Binding::basic(), source);
    /// ```
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu();
        Self {
            system: Mutex::new(system),
        }
    }
}

impl Default for HostCpuUsage {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageSource for HostCpuUsage {
    fn sample(&self) -> Result<Usage, MeasurementError> {
        let mut sys = self.system.lock().unwrap_or_else(PoisonError::into_inner);

        sys.refresh_cpu();

        if sys.cpus().is_empty() {
            return Err(MeasurementError::Unavailable(
                "no CPUs reported by host".to_string(),
            ));
        }

        let reading = sys.global_cpu_info().cpu_usage();
        let usage = usage_from_reading(reading)?;

        debug!(reading = %reading, usage = %usage, "Host CPU usage collected");

        Ok(usage)
    }
}

/// Convert a float percentage to a [`Usage`]
///
/// Rounds to the nearest integer and caps a full-load reading at 99 so it
/// stays inside [0, 100).
fn usage_from_reading(reading: f32) -> Result<Usage, MeasurementError> {
    if !reading.is_finite() || reading < 0.0 || reading > f32::from(MAX_USAGE_EXCLUSIVE) {
        return Err(MeasurementError::OutOfRange(reading));
    }

    let percent = (reading.round() as u8).min(MAX_USAGE_EXCLUSIVE - 1);
    Usage::new(percent).map_err(|_| MeasurementError::OutOfRange(reading))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_in_range() {
        let probe = HostCpuUsage::new();

        // Basic sanity checks, value depends on the host
        for _ in 0..3 {
            match probe.sample() {
                Ok(usage) => assert!(usage.percent() < MAX_USAGE_EXCLUSIVE),
                Err(e) => assert!(matches!(e, MeasurementError::Unavailable(_))),
            }
            std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        }
    }

    #[test]
    fn test_reading_rounds() {
        assert_eq!(usage_from_reading(0.0).unwrap().percent(), 0);
        assert_eq!(usage_from_reading(12.4).unwrap().percent(), 12);
        assert_eq!(usage_from_reading(50.5).unwrap().percent(), 51);
    }

    #[test]
    fn test_full_load_caps_at_99() {
        assert_eq!(usage_from_reading(99.6).unwrap().percent(), 99);
        assert_eq!(usage_from_reading(100.0).unwrap().percent(), 99);
    }

    #[test]
    fn test_invalid_readings() {
        assert_eq!(
            usage_from_reading(-1.0),
            Err(MeasurementError::OutOfRange(-1.0))
        );
        assert_eq!(
            usage_from_reading(140.0),
            Err(MeasurementError::OutOfRange(140.0))
        );
        assert!(matches!(
            usage_from_reading(f32::NAN),
            Err(MeasurementError::OutOfRange(_))
        ));
    }
}
