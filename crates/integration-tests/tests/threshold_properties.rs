//! Threshold properties over the whole usage range

use std::sync::Arc;

use corebind_core::application::Computer;
use corebind_core::domain::{MAX_USAGE_EXCLUSIVE, USAGE_OK_THRESHOLD};
use corebind_core::port::processing_unit::mocks::StubProcessingUnit;

#[test]
fn test_ok_for_every_usage_up_to_threshold() {
    for percent in 0..=USAGE_OK_THRESHOLD {
        let computer = Computer::new(Box::new(StubProcessingUnit::new(percent)));
        assert!(computer.is_status_ok(), "usage {percent} should be OK");
    }
}

#[test]
fn test_not_ok_for_every_usage_above_threshold() {
    for percent in (USAGE_OK_THRESHOLD + 1)..MAX_USAGE_EXCLUSIVE {
        let computer = Computer::new(Box::new(StubProcessingUnit::new(percent)));
        assert!(!computer.is_status_ok(), "usage {percent} should not be OK");
    }
}

#[test]
fn test_start_is_independent_of_status() {
    for percent in [0, 49, 50, 51, 99] {
        let unit = Arc::new(StubProcessingUnit::new(percent));
        let mut computer = Computer::new(Box::new(unit.clone()));

        let before = computer.is_status_ok();
        computer.start();

        assert_eq!(computer.is_status_ok(), before, "usage {percent}");
        assert_eq!(unit.start_count(), 1);
    }
}
