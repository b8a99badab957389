//! Centralized constants for capture and recording control.
//!
//! All capture-related magic numbers are defined here with documentation
//! explaining their purpose and constraints.

/// Quiet period after the last positive detection before recording
/// stops (milliseconds).
///
/// Detector output is noisy frame to frame; a subject that is briefly
/// occluded or missed must not split one event into many short clips.
/// Five seconds of grace absorbs those gaps while keeping clips tight.
pub const DEFAULT_COOLDOWN_MS: u64 = 5000;

/// Number of frames read during one-shot FPS sampling.
///
/// The sampler reads this many frames back to back and divides the
/// count by the elapsed wall-clock time. 100 frames is a few seconds
/// at typical camera rates, enough to average out per-frame jitter.
pub const FPS_SAMPLE_FRAMES: u32 = 100;

/// Frame rate used for the sink when no sampled rate is available.
///
/// Sinks need a nominal rate at open time. 30 FPS matches common
/// webcam defaults; a sampled rate replaces it once measured.
pub const DEFAULT_FALLBACK_FPS: f64 = 30.0;

/// File extension for saved recording artifacts.
pub const VIDEO_EXTENSION: &str = "mp4";

#[cfg(test)]
#[path = "constants_test.rs"]
mod tests;
