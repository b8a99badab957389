// Presence detector trait seam

use super::frame::{DetectionSet, Frame};

/// Maps a frame to the set of candidate subject regions.
///
/// Defined as a total function: detection failures must never abort
/// recording control, so an adapter over a fallible implementation
/// must absorb its errors into `DetectionSet::empty()` and log them
/// separately.
pub trait PresenceDetector: Send {
    fn detect(&mut self, frame: &Frame) -> DetectionSet;
}

/// Detector that never reports a subject; useful as a placeholder
/// when detection is disabled at the type level and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDetector;

impl PresenceDetector for NullDetector {
    fn detect(&mut self, _frame: &Frame) -> DetectionSet {
        DetectionSet::empty()
    }
}
