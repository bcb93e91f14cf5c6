//! Tests for error types

use airspace_scheduler::core::SchedulerError;

#[test]
fn test_not_found_error() {
    let err = SchedulerError::NotFound { size: 6 };
    assert_eq!(format!("{}", err), "no free window of 6 units in airspace");
    assert!(err.is_retryable());
}

#[test]
fn test_unsafe_error() {
    let err = SchedulerError::Unsafe { requested: 5, free: 4 };
    assert_eq!(format!("{}", err), "unsafe allocation: requested 5 units, 4 free");
    assert!(err.is_retryable());
}

#[test]
fn test_out_of_range_error() {
    let err = SchedulerError::OutOfRange { start: 18, size: 3, capacity: 20 };
    assert_eq!(format!("{}", err), "range 18..18+3 out of range for capacity 20");
    assert!(!err.is_retryable());
}

#[test]
fn test_invalid_plane_error() {
    let err = SchedulerError::InvalidPlane { id: 3, reason: "footprint must be greater than 0".into() };
    assert_eq!(format!("{}", err), "invalid plane 3: footprint must be greater than 0");
}

#[test]
fn test_step_limit_error() {
    let err = SchedulerError::StepLimitExceeded { limit: 10 };
    assert_eq!(format!("{}", err), "step limit of 10 exceeded");
    assert!(!err.is_retryable());
}
