// Dedicated capture thread
//
// This module provides a thread-safe handle to a running capture
// loop. The loop executes on its own thread and is controlled via
// a command channel.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::channel::FrameChannel;
use super::config::CaptureConfig;
use super::detector::PresenceDetector;
use super::pipeline::{CaptureCommand, CaptureLoop};
use super::sink::VideoSink;
use super::source::FrameSource;
use crate::events::CaptureEventEmitter;

/// Errors from capture thread operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureThreadError {
    /// The capture thread has disconnected
    #[error("capture thread disconnected")]
    ThreadDisconnected,
    /// The loop did not acknowledge a stop in time
    #[error("capture stop timed out")]
    StopTimedOut,
}

/// Handle to the capture thread.
///
/// Send + Sync; commands are delivered over a channel to the dedicated
/// worker. When dropped, the worker is stopped and joined.
pub struct CaptureThreadHandle {
    sender: Sender<CaptureCommand>,
    thread: Option<JoinHandle<()>>,
    channel: FrameChannel,
}

impl CaptureThreadHandle {
    /// Spawn a capture worker over the given collaborators.
    ///
    /// The worker opens the source itself; an open failure ends the
    /// run immediately and is reported through the emitter.
    pub fn spawn(
        config: CaptureConfig,
        source: Box<dyn FrameSource>,
        detector: Box<dyn PresenceDetector>,
        sink: Box<dyn VideoSink>,
        emitter: Arc<dyn CaptureEventEmitter>,
    ) -> Self {
        let channel = FrameChannel::new();
        let (sender, receiver) = mpsc::channel();

        let worker_channel = channel.clone();
        let thread = thread::spawn(move || {
            capture_thread_main(config, source, detector, sink, worker_channel, emitter, receiver);
        });

        Self {
            sender,
            thread: Some(thread),
            channel,
        }
    }

    /// Another handle to the latest-frame slot the worker publishes to
    pub fn frames(&self) -> FrameChannel {
        self.channel.clone()
    }

    /// Stop the loop and wait for its ordered shutdown to complete.
    ///
    /// Returns Ok if the worker already exited on its own (e.g. the
    /// source reached end-of-stream).
    pub fn stop(&self) -> Result<(), CaptureThreadError> {
        let (ack_tx, ack_rx) = mpsc::channel();
        if self
            .sender
            .send(CaptureCommand::Stop(Some(ack_tx)))
            .is_err()
        {
            return Ok(());
        }
        match ack_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(()) => Ok(()),
            // Worker exited without draining the command queue.
            Err(RecvTimeoutError::Disconnected) => Ok(()),
            Err(RecvTimeoutError::Timeout) => Err(CaptureThreadError::StopTimedOut),
        }
    }

    /// Enable or disable presence detection mid-run
    pub fn set_detection(&self, enabled: bool) -> Result<(), CaptureThreadError> {
        self.sender
            .send(CaptureCommand::SetDetection(enabled))
            .map_err(|_| CaptureThreadError::ThreadDisconnected)
    }

    /// Request one-shot FPS sampling; the result arrives via the
    /// emitter's fps_updated event
    pub fn sample_fps(&self) -> Result<(), CaptureThreadError> {
        self.sender
            .send(CaptureCommand::SampleFps)
            .map_err(|_| CaptureThreadError::ThreadDisconnected)
    }

    /// True once the worker has exited
    pub fn is_finished(&self) -> bool {
        self.thread
            .as_ref()
            .map(|t| t.is_finished())
            .unwrap_or(true)
    }
}

impl Drop for CaptureThreadHandle {
    /// Stop the worker and join it when the handle is dropped.
    fn drop(&mut self) {
        let _ = self.sender.send(CaptureCommand::Stop(None));
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Worker entry point: build the loop and run it to completion.
#[cfg_attr(coverage_nightly, coverage(off))]
fn capture_thread_main(
    config: CaptureConfig,
    source: Box<dyn FrameSource>,
    detector: Box<dyn PresenceDetector>,
    sink: Box<dyn VideoSink>,
    channel: FrameChannel,
    emitter: Arc<dyn CaptureEventEmitter>,
    receiver: mpsc::Receiver<CaptureCommand>,
) {
    crate::info!("capture thread started");
    let mut capture = CaptureLoop::new(config, source, detector, sink, channel, emitter);
    if let Err(e) = capture.run(&receiver) {
        crate::error!("capture run failed to start: {}", e);
    }
    crate::info!("capture thread exiting");
}

#[cfg(test)]
#[path = "thread_test.rs"]
mod tests;
