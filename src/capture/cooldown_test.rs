use super::*;
use std::thread;

#[test]
fn test_not_expired_at_construction() {
    // Initialized "just reset": stale elapsed time must not trigger a
    // stop before any detection has occurred.
    let timer = CooldownTimer::new(Duration::from_millis(100));
    assert!(!timer.has_expired());
}

#[test]
fn test_expires_after_threshold() {
    let timer = CooldownTimer::new(Duration::from_millis(20));
    thread::sleep(Duration::from_millis(30));
    assert!(timer.has_expired());
}

#[test]
fn test_detection_resets_window() {
    let mut timer = CooldownTimer::new(Duration::from_millis(40));
    thread::sleep(Duration::from_millis(50));
    assert!(timer.has_expired());

    timer.record_detection();
    assert!(!timer.has_expired());

    thread::sleep(Duration::from_millis(50));
    assert!(timer.has_expired());
}

#[test]
fn test_threshold_accessor() {
    let timer = CooldownTimer::new(Duration::from_millis(5000));
    assert_eq!(timer.threshold(), Duration::from_millis(5000));
}
