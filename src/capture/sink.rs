// Video sink trait seam

use std::path::Path;

use super::frame::Frame;

/// Errors from the video sink, split by operation so the capture loop
/// can apply the right policy to each (open aborts the attempt, write
/// is best-effort, close is best-effort without a finished name)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    #[error("failed to open video sink: {0}")]
    OpenFailed(String),
    #[error("failed to write frame to sink: {0}")]
    WriteFailed(String),
    #[error("failed to close video sink: {0}")]
    CloseFailed(String),
}

/// Persists one recording artifact through an open/write/close
/// contract.
///
/// Opened exactly once per session and closed exactly once; the
/// recording controller guarantees the ordering, the capture loop
/// executes the calls.
pub trait VideoSink: Send {
    /// Open an artifact at `path` with the given nominal frame rate
    /// and dimensions
    fn open(
        &mut self,
        path: &Path,
        fps: f64,
        width: u32,
        height: u32,
    ) -> Result<(), SinkError>;

    /// Append one frame to the open artifact
    fn write(&mut self, frame: &Frame) -> Result<(), SinkError>;

    /// Finalize and release the artifact
    fn close(&mut self) -> Result<(), SinkError>;
}
