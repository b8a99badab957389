//! Shared utilities for the capture pipeline.
//!
//! This module provides common functionality used across the codebase:
//! - `settings`: JSON settings document with dot-path parameter lookup
//! - `storage`: session naming and saved-video path resolution

mod settings;
mod storage;

pub use settings::{Settings, SettingsError};
pub use storage::{new_session_name, saved_video_path};
