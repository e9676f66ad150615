//! Push-to-record state machine
//!
//! A press while idle starts a capture session, a press while recording
//! stops it and hands the finalized clip to the exchange worker. The state
//! is derived from whether a session handle is held, so there is never more
//! than one active session.

use crate::audio::{CaptureSession, Recorder, RecordingOptions};
use crate::LiveChatError;
use crossbeam_channel::Sender;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Visible state of the mic control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptureState {
    #[default]
    Idle,
    Recording,
}

impl CaptureState {
    pub fn is_recording(&self) -> bool {
        matches!(self, CaptureState::Recording)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, CaptureState::Idle)
    }
}

impl std::fmt::Display for CaptureState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureState::Idle => write!(f, "Idle"),
            CaptureState::Recording => write!(f, "Recording"),
        }
    }
}

/// User-facing alert raised by the capture flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn permission_required() -> Self {
        Self {
            title: "Permission required".to_string(),
            message: LiveChatError::PermissionDenied.user_message(),
        }
    }
}

pub struct VoiceCapture {
    recorder: Box<dyn Recorder>,
    options: RecordingOptions,
    session: Option<Box<dyn CaptureSession>>,
    clip_tx: Sender<PathBuf>,
    alert_tx: Sender<Alert>,
}

impl VoiceCapture {
    pub fn new(
        recorder: Box<dyn Recorder>,
        options: RecordingOptions,
        clip_tx: Sender<PathBuf>,
        alert_tx: Sender<Alert>,
    ) -> Self {
        Self {
            recorder,
            options,
            session: None,
            clip_tx,
            alert_tx,
        }
    }

    pub fn state(&self) -> CaptureState {
        if self.session.is_some() {
            CaptureState::Recording
        } else {
            CaptureState::Idle
        }
    }

    /// Mic control gesture: start when idle, stop when recording
    pub fn press(&mut self) -> CaptureState {
        match self.state() {
            CaptureState::Idle => self.start(),
            CaptureState::Recording => self.stop(),
        }
        self.state()
    }

    /// Begin recording. A no-op while a session is already active.
    pub fn start(&mut self) {
        if self.session.is_some() {
            debug!("Already recording, ignoring start request");
            return;
        }

        if !self.recorder.request_permission().is_granted() {
            warn!("{}", LiveChatError::PermissionDenied);
            if self.alert_tx.send(Alert::permission_required()).is_err() {
                warn!("No alert listener attached");
            }
            return;
        }

        if let Err(e) = self.recorder.configure(&self.options) {
            error!("Failed to configure recording: {}", e);
            return;
        }

        match self.recorder.start(self.options.quality) {
            Ok(session) => {
                self.session = Some(session);
                info!("Recording started");
            }
            Err(e) => error!("Failed to start recording: {}", e),
        }
    }

    /// Stop recording and dispatch the clip. A no-op without a session.
    pub fn stop(&mut self) {
        // Cleared before finalizing so a failed stop still leaves us idle
        let Some(session) = self.session.take() else {
            debug!("No active recording to stop");
            return;
        };

        let clip = match session.stop_and_finalize() {
            Ok(Some(clip)) => clip,
            Ok(None) => {
                debug!("Recording produced no clip");
                return;
            }
            Err(e) => {
                error!("Failed to stop recording: {}", e);
                return;
            }
        };

        info!("Recording stopped, dispatching {}", clip.display());
        if let Err(e) = self.clip_tx.send(clip) {
            error!("Voice exchange worker unavailable: {}", e);
        }
    }
}

impl Drop for VoiceCapture {
    fn drop(&mut self) {
        // Nobody is left to upload a clip, so none is written
        if let Some(session) = self.session.take() {
            debug!("Discarding unfinished recording");
            session.discard();
        }
    }
}
