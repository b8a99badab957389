// Capture loop: per-iteration orchestration of source, detector,
// controller, and sink

use std::fmt::Display;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::Instant;

use super::channel::FrameChannel;
use super::config::CaptureConfig;
use super::controller::{Action, RecordingController};
use super::detector::PresenceDetector;
use super::frame::{Dimensions, Frame};
use super::sink::VideoSink;
use super::source::{FrameSource, SourceError};
use crate::constants::{FPS_SAMPLE_FRAMES, VIDEO_EXTENSION};
use crate::events::{
    CaptureErrorPayload, CaptureEventEmitter, FpsUpdatedPayload, RecordingFinishedPayload,
};
use crate::util::saved_video_path;

/// Commands accepted by a running capture loop.
///
/// Drained without blocking at the top of each iteration, so a command
/// takes effect within at most one in-flight frame's processing time.
pub enum CaptureCommand {
    /// Exit the loop; the optional channel is acknowledged after the
    /// ordered shutdown (close session, release source) completes
    Stop(Option<Sender<()>>),
    /// Enable or disable presence detection
    SetDetection(bool),
    /// Request one-shot FPS sampling on the next iteration
    SampleFps,
}

/// The capture worker's main loop.
///
/// Runs on one dedicated thread; detector and sink calls are
/// synchronous on that thread. The only cross-thread state is the
/// `FrameChannel` slot. `RecordingController` and the cooldown are
/// owned here exclusively and need no locking.
pub struct CaptureLoop {
    config: CaptureConfig,
    source: Box<dyn FrameSource>,
    detector: Box<dyn PresenceDetector>,
    sink: Box<dyn VideoSink>,
    controller: RecordingController,
    channel: FrameChannel,
    emitter: Arc<dyn CaptureEventEmitter>,
    detection_enabled: bool,
    /// One-shot sampling flag; cleared after a measurement
    fps_sampling: bool,
    /// Sampled frame rate, once measured
    fps: Option<f64>,
    dimensions: Dimensions,
}

impl CaptureLoop {
    pub fn new(
        config: CaptureConfig,
        source: Box<dyn FrameSource>,
        detector: Box<dyn PresenceDetector>,
        sink: Box<dyn VideoSink>,
        channel: FrameChannel,
        emitter: Arc<dyn CaptureEventEmitter>,
    ) -> Self {
        let controller = RecordingController::new(config.cooldown);
        let detection_enabled = config.detection_enabled;
        Self {
            config,
            source,
            detector,
            sink,
            controller,
            channel,
            emitter,
            detection_enabled,
            fps_sampling: false,
            fps: None,
            dimensions: Dimensions {
                width: 0,
                height: 0,
            },
        }
    }

    /// Run until a `Stop` command arrives or the source ends.
    ///
    /// A source that cannot be opened is fatal to the run and returned
    /// as an error. End-of-stream and mid-run read failures terminate
    /// gracefully: any open session is closed first, then the source
    /// is released, and the run reports `Ok`.
    pub fn run(&mut self, commands: &Receiver<CaptureCommand>) -> Result<(), SourceError> {
        self.dimensions = match self.source.open() {
            Ok(dims) => dims,
            Err(e) => {
                self.report(&e);
                return Err(e);
            }
        };
        crate::info!(
            "capture started: {:?} at {}x{}",
            self.config.source,
            self.dimensions.width,
            self.dimensions.height
        );

        let mut running = true;
        let mut stop_ack = None;
        while running {
            // Cooperative cancellation: commands are checked before
            // each blocking read.
            while let Ok(command) = commands.try_recv() {
                match command {
                    CaptureCommand::Stop(ack) => {
                        crate::debug!("received STOP command");
                        stop_ack = ack;
                        running = false;
                    }
                    CaptureCommand::SetDetection(enabled) => {
                        crate::debug!("detection enabled: {}", enabled);
                        self.detection_enabled = enabled;
                    }
                    CaptureCommand::SampleFps => {
                        self.fps_sampling = true;
                    }
                }
            }
            if !running {
                break;
            }

            let frame = match self.source.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    crate::info!("source reached end of stream");
                    break;
                }
                Err(e) => {
                    // Read failures end the run the same way a clean
                    // end-of-stream does.
                    self.report(&e);
                    break;
                }
            };

            let present = self.detection_enabled
                && self.detector.detect(&frame).filter_nested().present();

            let action = self.controller.step(present);
            self.execute(action, &frame);

            self.channel.publish(frame.clone());
            self.emitter.emit_frame_captured(&frame);

            if self.fps_sampling {
                self.sample_fps();
            }
        }

        // Ordered shutdown: close any open session, release the
        // source, then acknowledge.
        if self.controller.close_on_shutdown() {
            self.finish_session();
        }
        self.source.close();
        if let Some(ack) = stop_ack {
            let _ = ack.send(());
        }
        crate::info!("capture run finished");
        Ok(())
    }

    /// Execute the controller's decision against the sink
    fn execute(&mut self, action: Action, frame: &Frame) {
        match action {
            Action::None => {}
            Action::OpenSink => self.open_sink(frame),
            Action::WriteFrame => self.write_frame(frame),
            Action::CloseSink => self.finish_session(),
        }
    }

    /// Open the sink for the pending session and write the triggering
    /// frame. A failed open aborts the attempt without stopping
    /// capture.
    fn open_sink(&mut self, frame: &Frame) {
        let name = match self.controller.session() {
            Some(session) => session.name.clone(),
            // Unreachable through the controller API: OpenSink is only
            // returned with a freshly created session.
            None => return,
        };
        let path = saved_video_path(&self.config.output_dir, &name, VIDEO_EXTENSION);
        let fps = self.fps.unwrap_or(self.config.fallback_fps);
        match self.sink.open(
            &path,
            fps,
            self.dimensions.width,
            self.dimensions.height,
        ) {
            Ok(()) => {
                crate::info!("recording started: {}", path.display());
                self.write_frame(frame);
            }
            Err(e) => {
                self.report(&e);
                self.controller.abort_open();
            }
        }
    }

    /// Best-effort frame write; a failure is reported and recording
    /// continues. Repeated-failure policy is left to the host.
    fn write_frame(&mut self, frame: &Frame) {
        if let Err(e) = self.sink.write(frame) {
            self.report(&e);
        }
    }

    /// Close the sink for the session the controller just retired.
    /// The finished-session name is emitted only on a successful
    /// close.
    fn finish_session(&mut self) {
        let finished = self.controller.take_finished();
        match self.sink.close() {
            Ok(()) => {
                if let Some(session) = finished {
                    let path =
                        saved_video_path(&self.config.output_dir, &session.name, VIDEO_EXTENSION);
                    crate::info!("recording finished: {}", session.name);
                    self.emitter.emit_recording_finished(RecordingFinishedPayload {
                        name: session.name,
                        path: path.display().to_string(),
                    });
                }
            }
            Err(e) => self.report(&e),
        }
    }

    /// One-shot FPS measurement: read a fixed batch of frames and
    /// divide the count by the elapsed wall-clock time. Measurement
    /// frames are not detected on, recorded, or published.
    fn sample_fps(&mut self) {
        let start = Instant::now();
        let mut read = 0u32;
        while read < FPS_SAMPLE_FRAMES {
            match self.source.next_frame() {
                Ok(Some(_)) => read += 1,
                Ok(None) | Err(_) => break,
            }
        }
        self.fps_sampling = false;

        let elapsed = start.elapsed().as_secs_f64();
        if read > 0 && elapsed > 0.0 {
            let fps = read as f64 / elapsed;
            self.fps = Some(fps);
            crate::info!("sampled frame rate: {:.1} fps over {} frames", fps, read);
            self.emitter.emit_fps_updated(FpsUpdatedPayload { fps });
        }
    }

    /// Log a non-fatal failure and report it through the emitter
    fn report(&self, error: &dyn Display) {
        crate::error!("{}", error);
        self.emitter.emit_capture_error(CaptureErrorPayload {
            message: error.to_string(),
        });
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
