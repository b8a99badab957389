// Tests for the settings module

use super::*;
use serde_json::json;
use std::io::Write;

fn doc() -> Settings {
    Settings::from_value(json!({
        "current": "cam1",
        "cam1": {
            "kind": "webcam",
            "num": 2,
            "active": true,
            "empty": null,
            "deep": { "threshold": 1.23 }
        }
    }))
}

#[test]
fn test_top_level_lookup() {
    assert_eq!(doc().get("current"), Some("cam1".to_string()));
}

#[test]
fn test_nested_lookup() {
    let settings = doc();
    assert_eq!(settings.get("cam1.kind"), Some("webcam".to_string()));
    assert_eq!(settings.get("cam1.deep.threshold"), Some("1.23".to_string()));
}

#[test]
fn test_values_come_back_stringified() {
    let settings = doc();
    assert_eq!(settings.get("cam1.num"), Some("2".to_string()));
    assert_eq!(settings.get("cam1.active"), Some("true".to_string()));
}

#[test]
fn test_absent_keys_resolve_to_none() {
    let settings = doc();
    assert_eq!(settings.get("cam9.kind"), None);
    assert_eq!(settings.get("cam1.missing"), None);
    // Indexing through a leaf value is absent, not an error.
    assert_eq!(settings.get("cam1.num.deeper"), None);
    // Null is treated as absent.
    assert_eq!(settings.get("cam1.empty"), None);
}

#[test]
fn test_get_or_applies_fallback() {
    let settings = doc();
    assert_eq!(settings.get_or("cam1.kind", "dvr"), "webcam");
    assert_eq!(settings.get_or("cam1.missing", "dvr"), "dvr");
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"current\": \"cam3\", \"cam3\": {{\"num\": 0}}}}").unwrap();

    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(settings.get("current"), Some("cam3".to_string()));
    assert_eq!(settings.get("cam3.num"), Some("0".to_string()));
}

#[test]
fn test_load_errors() {
    assert!(matches!(
        Settings::load(std::path::Path::new("/nonexistent/config.cfg")),
        Err(SettingsError::Io(_))
    ));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(matches!(
        Settings::load(file.path()),
        Err(SettingsError::Parse(_))
    ));
}
