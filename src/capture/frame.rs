// Frame and detection data types shared across the capture pipeline

use chrono::{DateTime, Utc};

/// One captured video frame.
///
/// Owns its pixel buffer. Produced by a `FrameSource`, handed to the
/// capture loop for one iteration, then published through the
/// `FrameChannel`. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Raw pixel data in the source's native layout
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Wall-clock capture time
    pub timestamp: DateTime<Utc>,
}

impl Frame {
    /// Create a frame timestamped now
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
            timestamp: Utc::now(),
        }
    }

    /// Frame dimensions as (width, height)
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}

/// Pixel dimensions of a frame or source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// An axis-aligned detection rectangle with a label
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Detector-assigned class label (e.g. "person")
    pub label: String,
}

impl Region {
    pub fn new(x: i32, y: i32, width: u32, height: u32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
        }
    }

    /// A region with zero area detects nothing
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True if `other` lies entirely within this region
    pub fn contains(&self, other: &Region) -> bool {
        let (r, b) = (
            self.x + self.width as i32,
            self.y + self.height as i32,
        );
        let (or, ob) = (
            other.x + other.width as i32,
            other.y + other.height as i32,
        );
        other.x >= self.x && other.y >= self.y && or <= r && ob <= b
    }
}

/// The regions a detector reported for one frame.
///
/// Ephemeral: produced fresh each iteration and reduced to a presence
/// boolean, never retained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionSet {
    regions: Vec<Region>,
}

impl DetectionSet {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// An empty set (also what failing detector adapters must return)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Drop degenerate regions and regions fully enclosed by another.
    ///
    /// Multi-scale detectors report the same subject at several nested
    /// scales; only the outermost rectangle counts. A region survives
    /// if no *other* region fully contains it; two identical regions
    /// contain each other and are both dropped.
    pub fn filter_nested(self) -> Self {
        let kept = self
            .regions
            .iter()
            .enumerate()
            .filter(|(i, r)| {
                !r.is_degenerate()
                    && !self
                        .regions
                        .iter()
                        .enumerate()
                        .any(|(j, other)| j != *i && other.contains(r))
            })
            .map(|(_, r)| r.clone())
            .collect();
        Self { regions: kept }
    }

    /// Presence after nested filtering: any region left means a
    /// subject is in frame
    pub fn present(&self) -> bool {
        !self.regions.is_empty()
    }
}

#[cfg(test)]
#[path = "frame_test.rs"]
mod tests;
