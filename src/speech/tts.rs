//! Text-to-speech backends
//!
//! `CommandSpeech` runs the platform's TTS program (`say` on macOS,
//! `espeak-ng` elsewhere) as a child process, one utterance at a time.

use super::SpeechOutput;
use parking_lot::Mutex;
use std::process::{Child, Command, Stdio};
use tracing::{debug, info, warn};

/// Default TTS program for the current platform
pub fn default_program() -> &'static str {
    if cfg!(target_os = "macos") {
        "say"
    } else {
        "espeak-ng"
    }
}

/// Speaks by spawning an external TTS program with the text as its argument
pub struct CommandSpeech {
    program: String,
    args: Vec<String>,
    current: Mutex<Option<Child>>,
}

impl CommandSpeech {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current: Mutex::new(None),
        }
    }

    /// Use the platform default program
    pub fn platform_default() -> Self {
        Self::new(default_program())
    }

    /// Extra arguments placed before the text
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check whether an utterance is still running
    pub fn is_speaking(&self) -> bool {
        let mut current = self.current.lock();
        match current.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }

    /// Kill and reap a child if it is still running
    fn cancel(&self, mut child: Child) {
        if let Ok(None) = child.try_wait() {
            debug!("Cancelling utterance (pid {})", child.id());
            if let Err(e) = child.kill() {
                warn!("Failed to stop {}: {}", self.program, e);
            }
        }
        let _ = child.wait();
    }
}

impl SpeechOutput for CommandSpeech {
    fn stop(&self) {
        if let Some(child) = self.current.lock().take() {
            self.cancel(child);
        }
    }

    fn speak(&self, text: &str) {
        if text.is_empty() {
            return;
        }

        // Held across cancel and store so concurrent says never overlap
        let mut current = self.current.lock();
        if let Some(previous) = current.take() {
            self.cancel(previous);
        }

        let spawned = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                debug!("Speaking {} chars via {}", text.len(), self.program);
                *current = Some(child);
            }
            Err(e) => warn!("Text-to-speech unavailable ({}): {}", self.program, e),
        }
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Speaker that only logs, for headless runs or when speech is disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSpeech;

impl SpeechOutput for SilentSpeech {
    fn stop(&self) {}

    fn speak(&self, text: &str) {
        info!("(speech disabled) {}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_does_not_panic() {
        let speech = CommandSpeech::new("livechat-no-such-tts-program");
        speech.stop();
        speech.speak("hello");
        assert!(!speech.is_speaking());
    }

    #[test]
    fn test_empty_text_is_not_spoken() {
        let speech = CommandSpeech::new("livechat-no-such-tts-program");
        speech.speak("");
        assert!(speech.current.lock().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_stop_kills_running_utterance() {
        // `sleep` stands in for a long utterance
        let speech = CommandSpeech::new("sleep");
        speech.speak("5");
        assert!(speech.is_speaking());
        speech.stop();
        assert!(!speech.is_speaking());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_interleaved_says_never_overlap() {
        let speech = CommandSpeech::new("sleep");
        let pid = |speech: &CommandSpeech| speech.current.lock().as_ref().map(Child::id);

        // Two threads' stop/speak pairs landing as stop, stop, speak, speak
        speech.stop();
        speech.stop();
        speech.speak("30");
        let first = pid(&speech).unwrap();
        speech.speak("30");
        let second = pid(&speech).unwrap();
        assert_ne!(first, second);

        // Replaced utterance is killed and reaped, not left running
        assert!(!std::path::Path::new(&format!("/proc/{}", first)).exists());

        speech.stop();
        assert!(!std::path::Path::new(&format!("/proc/{}", second)).exists());
        assert!(!speech.is_speaking());
    }
}
