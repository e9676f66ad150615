//! Speech output for assistant replies
//!
//! Vocalizing text is delegated to a platform text-to-speech service. This
//! module provides:
//! - The `SpeechOutput` contract (stop/speak) consumed by the chat flows
//! - A command-backed speaker driving the platform TTS program
//! - A silent speaker for headless runs

pub mod tts;

pub use tts::{CommandSpeech, SilentSpeech};

/// Platform text-to-speech capability
pub trait SpeechOutput: Send + Sync {
    /// Cancel any in-progress utterance
    fn stop(&self);

    /// Begin vocalizing `text`
    fn speak(&self, text: &str);
}

/// Speak `text`, cutting off whatever was being said before
pub fn say(speech: &dyn SpeechOutput, text: &str) {
    speech.stop();
    speech.speak(text);
}
