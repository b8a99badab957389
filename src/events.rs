// Capture events for host notification
// Defines event payloads and an emission trait for testability

use serde::Serialize;

use crate::capture::Frame;

/// Event names as constants for consistency
pub mod event_names {
    pub const FRAME_CAPTURED: &str = "frame_captured";
    pub const FPS_UPDATED: &str = "fps_updated";
    pub const RECORDING_FINISHED: &str = "recording_finished";
    pub const CAPTURE_ERROR: &str = "capture_error";
}

/// Payload for fps_updated event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FpsUpdatedPayload {
    /// Measured frames per second from one-shot sampling
    pub fps: f64,
}

/// Payload for recording_finished event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecordingFinishedPayload {
    /// Generated session name
    pub name: String,
    /// Path of the saved artifact
    pub path: String,
}

/// Payload for capture_error event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CaptureErrorPayload {
    /// Descriptive error message
    pub message: String,
}

/// Trait for emitting capture events.
///
/// Allows mocking in tests while the host wires a real dispatcher in
/// production. Callbacks are delivered synchronously from the capture
/// worker thread; subscribers must not block significantly unless the
/// host marshals delivery elsewhere.
pub trait CaptureEventEmitter: Send + Sync {
    /// Emit frame_captured for every published frame
    fn emit_frame_captured(&self, frame: &Frame);

    /// Emit fps_updated after one-shot sampling completes
    fn emit_fps_updated(&self, payload: FpsUpdatedPayload);

    /// Emit recording_finished after a session's sink closed cleanly
    fn emit_recording_finished(&self, payload: RecordingFinishedPayload);

    /// Emit capture_error for non-fatal failures
    fn emit_capture_error(&self, payload: CaptureErrorPayload);
}

/// Emitter that drops every event, for hosts that only consume the
/// frame channel
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEmitter;

impl CaptureEventEmitter for NoopEmitter {
    fn emit_frame_captured(&self, _frame: &Frame) {}
    fn emit_fps_updated(&self, _payload: FpsUpdatedPayload) {}
    fn emit_recording_finished(&self, _payload: RecordingFinishedPayload) {}
    fn emit_capture_error(&self, _payload: CaptureErrorPayload) {}
}

/// Get the current timestamp in ISO 8601 format
pub fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
#[path = "events_test.rs"]
pub(crate) mod tests;
