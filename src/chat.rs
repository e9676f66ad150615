//! Typed message flow
//!
//! Typed messages never leave the device: each send is answered with a
//! deterministic echo reply which is then spoken.

use crate::messages::{ConversationStore, Message};
use crate::speech::{self, SpeechOutput};
use std::sync::Arc;
use tracing::debug;

/// Echo reply for a typed message
pub fn echo_reply(text: &str) -> String {
    format!("You said: {}", text)
}

#[derive(Clone)]
pub struct TextChat {
    store: ConversationStore,
    speech: Arc<dyn SpeechOutput>,
}

impl TextChat {
    pub fn new(store: ConversationStore, speech: Arc<dyn SpeechOutput>) -> Self {
        Self { store, speech }
    }

    /// Send the current input.
    ///
    /// Whitespace-only input is ignored and left untouched. Otherwise the
    /// user message and its echo are appended, the echo is spoken and the
    /// input is cleared. Returns whether anything was sent.
    pub fn send(&self, input: &mut String) -> bool {
        if input.trim().is_empty() {
            return false;
        }

        let user_message = Message::user(input.as_str());
        let reply = Message::assistant(echo_reply(input));
        let spoken = reply.content.clone();

        debug!("Sending typed message ({} chars)", input.len());
        self.store.append([user_message, reply]);
        speech::say(self.speech.as_ref(), &spoken);

        input.clear();
        true
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }
}
