// Recording state machine driven by per-frame presence signals

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::cooldown::CooldownTimer;
use crate::util::new_session_name;

/// Recording state enum representing the current state of archival
/// recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordingState {
    /// No recording in progress
    Stopped,
    /// Presence detected, sink open pending
    Starting,
    /// Actively writing frames to the sink
    Started,
    /// Cooldown expired, close pending (cancelable by new presence)
    Stopping,
}

impl Default for RecordingState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// What the capture loop must do with the sink this iteration.
///
/// The controller never touches the sink itself; it stays synchronous
/// and encoder-independent while the loop executes the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do
    None,
    /// Open the sink for the pending session, then write this frame
    OpenSink,
    /// Write this frame to the open sink
    WriteFrame,
    /// Close the sink; the finished session is available via
    /// `take_finished`
    CloseSink,
}

/// One contiguous recording attempt, from sink open to sink close
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSession {
    /// Generated time-based name, unique per session
    pub name: String,
    /// Wall-clock time the session was created
    pub started_at: DateTime<Utc>,
}

impl RecordingSession {
    fn new() -> Self {
        Self {
            name: new_session_name(),
            started_at: Utc::now(),
        }
    }
}

/// The four-state recording controller.
///
/// Consumes one presence boolean per frame and decides sink
/// open/write/close. Recording continues through detection gaps
/// shorter than the cooldown window; presence always wins over a
/// stale cooldown. The physical open happens only when `Starting` is
/// entered from `Stopped`, and the physical close only when
/// `Stopping` resolves to `Stopped` — re-entering `Starting` from
/// `Stopping` cancels the stop and keeps the existing open sink.
///
/// Owned exclusively by the capture worker; no locking required.
pub struct RecordingController {
    state: RecordingState,
    cooldown: CooldownTimer,
    /// Live session while state is Starting/Started/Stopping
    session: Option<RecordingSession>,
    /// Session handed off by the last CloseSink action
    finished: Option<RecordingSession>,
}

impl RecordingController {
    pub fn new(cooldown_threshold: Duration) -> Self {
        Self {
            state: RecordingState::Stopped,
            cooldown: CooldownTimer::new(cooldown_threshold),
            session: None,
            finished: None,
        }
    }

    pub fn state(&self) -> RecordingState {
        self.state
    }

    /// The live session, if one exists
    pub fn session(&self) -> Option<&RecordingSession> {
        self.session.as_ref()
    }

    /// Advance the state machine for one frame.
    ///
    /// Every transition table cell is total: the returned action is
    /// always defined and the state is always one of the four
    /// variants.
    #[must_use = "the returned action drives the sink and must be executed"]
    pub fn step(&mut self, present: bool) -> Action {
        if present {
            // Presence always resets the cooldown, in every state.
            self.cooldown.record_detection();
            match self.state {
                RecordingState::Stopped => {
                    self.session = Some(RecordingSession::new());
                    self.state = RecordingState::Starting;
                    Action::OpenSink
                }
                RecordingState::Starting => {
                    self.state = RecordingState::Started;
                    Action::WriteFrame
                }
                RecordingState::Started => Action::WriteFrame,
                RecordingState::Stopping => {
                    // Stop canceled before the sink was closed: keep
                    // the existing session, do not open a second one.
                    self.state = RecordingState::Starting;
                    Action::WriteFrame
                }
            }
        } else {
            let expired = self.cooldown.has_expired();
            match (self.state, expired) {
                (RecordingState::Stopped, _) => Action::None,
                (RecordingState::Starting, false) => {
                    self.state = RecordingState::Started;
                    Action::WriteFrame
                }
                (RecordingState::Started, false) => Action::WriteFrame,
                (RecordingState::Starting, true) | (RecordingState::Started, true) => {
                    self.state = RecordingState::Stopping;
                    Action::None
                }
                (RecordingState::Stopping, false) => Action::None,
                (RecordingState::Stopping, true) => {
                    self.state = RecordingState::Stopped;
                    self.finished = self.session.take();
                    Action::CloseSink
                }
            }
        }
    }

    /// Revert after a failed sink open: back to `Stopped`, half-formed
    /// session discarded. Not fatal; the next positive frame starts a
    /// fresh attempt.
    pub fn abort_open(&mut self) {
        crate::warn!("sink open failed, discarding session and reverting to Stopped");
        self.state = RecordingState::Stopped;
        self.session = None;
    }

    /// Take the session handed off by the last `CloseSink` action.
    ///
    /// The caller emits the finished-session name only if the physical
    /// close succeeded.
    pub fn take_finished(&mut self) -> Option<RecordingSession> {
        self.finished.take()
    }

    /// Tear down for shutdown: move to `Stopped` and retire any live
    /// session so the caller can close the sink and collect it via
    /// `take_finished`. Returns true if a session was live.
    pub fn close_on_shutdown(&mut self) -> bool {
        self.state = RecordingState::Stopped;
        match self.session.take() {
            Some(session) => {
                self.finished = Some(session);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
