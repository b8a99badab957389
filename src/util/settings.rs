//! Unified settings access utilities.
//!
//! Provides a consistent way to read named parameters from a JSON
//! settings document. Lookup failures are absorbed: a missing key
//! returns `None` and the caller supplies the fallback default.

use std::path::Path;

use serde_json::Value;

/// Errors loading a settings document
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A parsed settings document with dot-path parameter lookup.
///
/// Keys are nested paths like `"camera.threshold"`; intermediate
/// segments index into nested objects. Values come back stringified
/// (the number `222` resolves to `"222"`), matching how callers feed
/// them into parsers with explicit defaults.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    root: Value,
}

impl Settings {
    /// Wrap an already-parsed JSON document
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parse a settings document from a JSON string
    pub fn from_str(json: &str) -> Result<Self, SettingsError> {
        Ok(Self {
            root: serde_json::from_str(json)?,
        })
    }

    /// Load and parse a settings file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Resolve a dot-separated key path.
    ///
    /// Returns `None` if any path segment is absent or a non-object is
    /// indexed into; never an error.
    pub fn get(&self, key_path: &str) -> Option<String> {
        let mut node = &self.root;
        for segment in key_path.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        match node {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Resolve a key path, falling back to `default` when absent
    pub fn get_or(&self, key_path: &str, default: &str) -> String {
        self.get(key_path)
            .unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
