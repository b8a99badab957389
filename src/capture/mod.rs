// Capture module: frame acquisition, presence-driven recording
// control, and cross-thread frame publication

mod channel;
pub use channel::FrameChannel;

mod config;
pub use config::{CaptureConfig, SourceDescriptor};

mod controller;
pub use controller::{Action, RecordingController, RecordingSession, RecordingState};

mod cooldown;
pub use cooldown::CooldownTimer;

mod detector;
pub use detector::{NullDetector, PresenceDetector};

mod frame;
pub use frame::{DetectionSet, Dimensions, Frame, Region};

mod pipeline;
pub use pipeline::{CaptureCommand, CaptureLoop};

mod sink;
pub use sink::{SinkError, VideoSink};

mod source;
pub use source::{FrameSource, SourceError};

mod thread;
pub use thread::{CaptureThreadHandle, CaptureThreadError};
