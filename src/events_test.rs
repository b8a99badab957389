use super::*;
use std::sync::{Arc, Mutex};

/// Mock emitter that records all emitted events for testing
#[derive(Default)]
pub struct MockEmitter {
    pub frames: Arc<Mutex<Vec<Frame>>>,
    pub fps_events: Arc<Mutex<Vec<FpsUpdatedPayload>>>,
    pub finished_events: Arc<Mutex<Vec<RecordingFinishedPayload>>>,
    pub error_events: Arc<Mutex<Vec<CaptureErrorPayload>>>,
}

impl MockEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finished_names(&self) -> Vec<String> {
        self.finished_events
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }
}

impl CaptureEventEmitter for MockEmitter {
    fn emit_frame_captured(&self, frame: &Frame) {
        self.frames.lock().unwrap().push(frame.clone());
    }

    fn emit_fps_updated(&self, payload: FpsUpdatedPayload) {
        self.fps_events.lock().unwrap().push(payload);
    }

    fn emit_recording_finished(&self, payload: RecordingFinishedPayload) {
        self.finished_events.lock().unwrap().push(payload);
    }

    fn emit_capture_error(&self, payload: CaptureErrorPayload) {
        self.error_events.lock().unwrap().push(payload);
    }
}

#[test]
fn test_mock_emitter_records_events() {
    let emitter = MockEmitter::new();

    emitter.emit_fps_updated(FpsUpdatedPayload { fps: 25.0 });
    emitter.emit_recording_finished(RecordingFinishedPayload {
        name: "2026-08-27+10:00:00".to_string(),
        path: "/data/recordings/2026-08-27+10:00:00.mp4".to_string(),
    });
    emitter.emit_capture_error(CaptureErrorPayload {
        message: "failed to write frame to sink: disk full".to_string(),
    });

    assert_eq!(emitter.fps_events.lock().unwrap().len(), 1);
    assert_eq!(emitter.finished_names(), vec!["2026-08-27+10:00:00"]);
    assert_eq!(emitter.error_events.lock().unwrap().len(), 1);
}

#[test]
fn test_payload_serialization() {
    let payload = RecordingFinishedPayload {
        name: "2026-08-27+10:00:00".to_string(),
        path: "/data/recordings/2026-08-27+10:00:00.mp4".to_string(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["name"], "2026-08-27+10:00:00");
    assert_eq!(json["path"], "/data/recordings/2026-08-27+10:00:00.mp4");

    let fps = serde_json::to_value(FpsUpdatedPayload { fps: 50.0 }).unwrap();
    assert_eq!(fps["fps"], 50.0);
}

#[test]
fn test_current_timestamp_is_rfc3339() {
    let ts = current_timestamp();
    assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
}

#[test]
fn test_noop_emitter_accepts_everything() {
    let emitter = NoopEmitter;
    emitter.emit_frame_captured(&Frame::new(vec![0; 4], 2, 1));
    emitter.emit_fps_updated(FpsUpdatedPayload { fps: 0.0 });
    emitter.emit_capture_error(CaptureErrorPayload {
        message: String::new(),
    });
}
