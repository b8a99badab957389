// Debounce timer for recording stop decisions

use std::time::{Duration, Instant};

/// Tracks time since the last positive detection.
///
/// The recording controller keeps a session alive until this window
/// expires, bridging brief gaps in noisy detector output. Starts "just
/// reset" so a stale elapsed value can never trigger a stop before the
/// first detection has occurred.
#[derive(Debug, Clone)]
pub struct CooldownTimer {
    last_positive: Instant,
    threshold: Duration,
}

impl CooldownTimer {
    pub fn new(threshold: Duration) -> Self {
        Self {
            last_positive: Instant::now(),
            threshold,
        }
    }

    /// Reset the window; called on every positive detection
    pub fn record_detection(&mut self) {
        self.last_positive = Instant::now();
    }

    /// True once the quiet period has elapsed since the last positive
    /// detection (strictly greater than the threshold)
    pub fn has_expired(&self) -> bool {
        self.last_positive.elapsed() > self.threshold
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }
}

#[cfg(test)]
#[path = "cooldown_test.rs"]
mod tests;
