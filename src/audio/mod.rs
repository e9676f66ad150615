//! Platform recorder abstraction
//!
//! Voice capture consumes three platform capabilities: a microphone
//! permission query, recording configuration, and a capture session that is
//! stopped and finalized into a local clip file.

#[cfg(feature = "audio-io")]
pub mod input;
pub mod wav;

#[cfg(feature = "audio-io")]
pub use input::MicRecorder;
pub use wav::write_wav;

use crate::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Outcome of a microphone permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

impl Permission {
    pub fn is_granted(&self) -> bool {
        matches!(self, Permission::Granted)
    }
}

/// Recording quality preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    /// Device native sample rate
    #[default]
    High,
    /// Speech-grade 16 kHz
    Low,
}

impl QualityPreset {
    /// Target sample rate, `None` keeps the device rate
    pub fn target_sample_rate(&self) -> Option<u32> {
        match self {
            QualityPreset::High => None,
            QualityPreset::Low => Some(16_000),
        }
    }
}

/// Options applied before each capture session starts
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecordingOptions {
    /// Keep recording while the device is in silent mode
    pub allow_in_silent_mode: bool,
    pub quality: QualityPreset,
}

impl Default for RecordingOptions {
    fn default() -> Self {
        Self {
            allow_in_silent_mode: true,
            quality: QualityPreset::High,
        }
    }
}

/// A live microphone recording, from start to finalize
pub trait CaptureSession {
    /// Stop capturing and write the clip, returning its location.
    ///
    /// `Ok(None)` means nothing was captured.
    fn stop_and_finalize(self: Box<Self>) -> Result<Option<PathBuf>>;

    /// Stop capturing and throw the audio away. No clip is written.
    fn discard(self: Box<Self>) {}
}

/// Platform audio recorder
pub trait Recorder {
    /// Ask for microphone access
    fn request_permission(&mut self) -> Permission;

    /// Apply recording configuration ahead of `start`
    fn configure(&mut self, options: &RecordingOptions) -> Result<()>;

    /// Begin a new capture session
    fn start(&mut self, quality: QualityPreset) -> Result<Box<dyn CaptureSession>>;
}
