use super::*;

#[test]
fn test_cooldown_is_seconds_scale() {
    // The debounce window must be long enough to bridge detector
    // dropouts but short enough that clips end promptly.
    assert!(DEFAULT_COOLDOWN_MS >= 1000);
    assert!(DEFAULT_COOLDOWN_MS <= 30_000);
}

#[test]
fn test_fps_sample_covers_multiple_seconds_at_default_rate() {
    // Sampling should span at least a second of footage at the
    // fallback rate so the average is meaningful.
    let seconds = FPS_SAMPLE_FRAMES as f64 / DEFAULT_FALLBACK_FPS;
    assert!(seconds >= 1.0);
}

#[test]
fn test_fallback_fps_is_positive() {
    assert!(DEFAULT_FALLBACK_FPS > 0.0);
}
