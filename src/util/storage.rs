//! Session naming and saved-video path resolution.

use std::path::{Path, PathBuf};

use chrono::Local;

/// Generate a unique, time-based session name.
///
/// Local wall-clock time formatted `YYYY-MM-DD+HH:MM:SS`; sessions are
/// seconds apart by construction (a session spans at least one
/// cooldown window), so the name is unique in practice.
pub fn new_session_name() -> String {
    Local::now().format("%Y-%m-%d+%H:%M:%S").to_string()
}

/// Path of a saved artifact: `<output_dir>/<name>.<ext>`
pub fn saved_video_path(output_dir: &Path, name: &str, ext: &str) -> PathBuf {
    output_dir.join(format!("{name}.{ext}"))
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
