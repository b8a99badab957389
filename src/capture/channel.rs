// Single-slot frame publication for cross-thread consumers

use std::sync::Arc;

use parking_lot::Mutex;

use super::frame::Frame;

/// Thread-safe single-slot publication of the most recent frame.
///
/// A new publish supersedes any unread previous value — intentional
/// backpressure relief, since consumers (e.g. a display surface) only
/// ever need the latest frame. The lock is held only for the slot
/// swap/clone, never across a source read or an encoder call, so the
/// producer can never block on a slow consumer.
///
/// Cloning the channel yields another handle to the same slot.
#[derive(Clone, Default)]
pub struct FrameChannel {
    slot: Arc<Mutex<Option<Frame>>>,
}

impl FrameChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `frame` as the latest value, replacing any previous one
    pub fn publish(&self, frame: Frame) {
        *self.slot.lock() = Some(frame);
    }

    /// Snapshot of the latest published frame, if any
    pub fn latest(&self) -> Option<Frame> {
        self.slot.lock().clone()
    }

    /// True if a frame has been published and not cleared
    pub fn has_frame(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Drop the stored frame, releasing its buffer
    pub fn clear(&self) {
        *self.slot.lock() = None;
    }
}

#[cfg(test)]
#[path = "channel_test.rs"]
mod tests;
