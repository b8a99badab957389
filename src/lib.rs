// watchcat: presence-triggered video capture with debounced recording
// control. Frames flow from a pluggable source through an external
// presence detector into a four-state recording controller; the latest
// frame is published for cross-thread consumers.

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod capture;
pub mod constants;
pub mod events;
pub mod util;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};
