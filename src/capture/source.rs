// Frame source trait seam

use super::frame::{Dimensions, Frame};

/// Errors from a frame source
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The device or stream could not be opened (fatal to a run)
    #[error("failed to open video source: {0}")]
    OpenFailed(String),
    /// A mid-stream read failed (treated like end-of-stream)
    #[error("failed to read frame: {0}")]
    ReadFailed(String),
}

/// Sequential supplier of frames, backed by a device or a file.
///
/// `next` may block until a frame is available but must eventually
/// return `Ok(None)` (end-of-stream) or an error rather than block
/// forever; the capture loop cannot terminate otherwise.
pub trait FrameSource: Send {
    /// Open the source and report its frame dimensions
    fn open(&mut self) -> Result<Dimensions, SourceError>;

    /// Blocking read of the next frame; `Ok(None)` signals a clean
    /// end-of-stream
    fn next_frame(&mut self) -> Result<Option<Frame>, SourceError>;

    /// Release the underlying device or file handle
    fn close(&mut self);
}
