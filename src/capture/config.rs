// Capture configuration, resolved once and passed in at construction

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_COOLDOWN_MS, DEFAULT_FALLBACK_FPS};
use crate::util::Settings;

/// Where frames come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDescriptor {
    /// Local capture device by index (e.g. /dev/video0)
    Camera(u32),
    /// File path or stream address
    Path(String),
}

/// Immutable configuration for one capture run.
///
/// The loop never reads ambient global state; everything it needs
/// arrives here at construction.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Frame source to open
    pub source: SourceDescriptor,
    /// Quiet period before recording stops after the last detection
    pub cooldown: Duration,
    /// Sink frame rate used until a sampled rate is available
    pub fallback_fps: f64,
    /// Whether presence detection drives recording
    pub detection_enabled: bool,
    /// Directory recordings are saved into
    pub output_dir: PathBuf,
}

impl CaptureConfig {
    pub fn new(source: SourceDescriptor, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            cooldown: Duration::from_millis(DEFAULT_COOLDOWN_MS),
            fallback_fps: DEFAULT_FALLBACK_FPS,
            detection_enabled: true,
            output_dir: output_dir.into(),
        }
    }

    /// Resolve the configuration from a settings document.
    ///
    /// The `current` key names the active camera section; a section
    /// with `kind == "webcam"` selects a local device by `num`, any
    /// other kind selects the section's `url`. Missing keys fall back
    /// to defaults rather than failing.
    pub fn from_settings(settings: &Settings, output_dir: impl Into<PathBuf>) -> Self {
        let current = settings.get_or("current", "cam1");

        let source = if settings.get(&format!("{current}.kind")).as_deref() == Some("webcam") {
            let num = settings
                .get(&format!("{current}.num"))
                .and_then(|n| n.parse().ok())
                .unwrap_or(0);
            SourceDescriptor::Camera(num)
        } else {
            SourceDescriptor::Path(settings.get_or(&format!("{current}.url"), ""))
        };

        let cooldown_ms = settings
            .get(&format!("{current}.cooldown_ms"))
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_COOLDOWN_MS);

        let detection_enabled = settings
            .get(&format!("{current}.detection"))
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        Self {
            source,
            cooldown: Duration::from_millis(cooldown_ms),
            fallback_fps: DEFAULT_FALLBACK_FPS,
            detection_enabled,
            output_dir: output_dir.into(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
