//! Application state management
//!
//! This module provides the state behind the chat screen: the conversation,
//! the text input, the mic control and any pending alert.

use crate::audio::{Recorder, RecordingOptions};
use crate::chat::TextChat;
use crate::messages::ConversationStore;
use crate::speech::SpeechOutput;
use crate::voice::{Alert, CaptureState, VoiceCapture};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Central application state
pub struct AppState {
    /// Conversation shown in the message list
    pub messages: ConversationStore,

    /// Current text input
    pub input_text: String,

    /// Alert currently shown to the user
    pub alert: Option<Alert>,

    text_chat: TextChat,

    /// Mic control; absent when the screen runs text-only
    capture: Option<VoiceCapture>,

    alert_rx: Receiver<Alert>,
    alert_tx: Sender<Alert>,
}

impl AppState {
    /// Create a text-only state
    pub fn new(messages: ConversationStore, speech: Arc<dyn SpeechOutput>) -> Self {
        let (alert_tx, alert_rx) = unbounded();
        Self {
            text_chat: TextChat::new(messages.clone(), speech),
            messages,
            input_text: String::new(),
            alert: None,
            capture: None,
            alert_rx,
            alert_tx,
        }
    }

    /// Enable the mic control, dispatching finished clips to `clip_tx`
    pub fn with_voice(
        mut self,
        recorder: Box<dyn Recorder>,
        options: RecordingOptions,
        clip_tx: Sender<PathBuf>,
    ) -> Self {
        self.capture = Some(VoiceCapture::new(
            recorder,
            options,
            clip_tx,
            self.alert_tx.clone(),
        ));
        self
    }

    pub fn has_voice(&self) -> bool {
        self.capture.is_some()
    }

    pub fn recording_state(&self) -> CaptureState {
        self.capture
            .as_ref()
            .map(VoiceCapture::state)
            .unwrap_or_default()
    }

    /// Send the typed message
    pub fn send_message(&mut self) -> bool {
        self.text_chat.send(&mut self.input_text)
    }

    /// Mic control pressed
    pub fn press_mic(&mut self) {
        if let Some(capture) = self.capture.as_mut() {
            let state = capture.press();
            debug!("Mic pressed, now {}", state);
        }
    }

    /// Process incoming events from the capture flow
    pub fn poll_events(&mut self) {
        while let Ok(alert) = self.alert_rx.try_recv() {
            self.alert = Some(alert);
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
