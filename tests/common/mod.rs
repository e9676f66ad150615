//! Test doubles shared by the integration tests

#![allow(dead_code)]

use livechat::audio::{CaptureSession, Permission, QualityPreset, Recorder, RecordingOptions};
use livechat::speech::SpeechOutput;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechCall {
    Stop,
    Speak(String),
}

/// Speech output that records every call
#[derive(Default)]
pub struct RecordingSpeech {
    calls: Mutex<Vec<SpeechCall>>,
}

impl RecordingSpeech {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<SpeechCall> {
        self.calls.lock().clone()
    }

    /// Texts passed to `speak`, in order
    pub fn spoken(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                SpeechCall::Speak(text) => Some(text.clone()),
                SpeechCall::Stop => None,
            })
            .collect()
    }
}

impl SpeechOutput for RecordingSpeech {
    fn stop(&self) {
        self.calls.lock().push(SpeechCall::Stop);
    }

    fn speak(&self, text: &str) {
        self.calls.lock().push(SpeechCall::Speak(text.to_string()));
    }
}

/// Write a small stand-in clip to `dir`
pub fn write_clip(dir: &std::path::Path) -> PathBuf {
    write_named_clip(dir, "clip.m4a")
}

pub fn write_named_clip(dir: &std::path::Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"fake-m4a-bytes").unwrap();
    path
}

/// Recorder that writes a fixed clip on finalize
pub struct FakeRecorder {
    pub permission: Permission,
    pub clip_dir: PathBuf,
    pub starts: Arc<Mutex<usize>>,
}

impl FakeRecorder {
    pub fn granted(clip_dir: impl Into<PathBuf>) -> Self {
        Self {
            permission: Permission::Granted,
            clip_dir: clip_dir.into(),
            starts: Arc::new(Mutex::new(0)),
        }
    }

    pub fn denied() -> Self {
        Self {
            permission: Permission::Denied,
            clip_dir: std::env::temp_dir(),
            starts: Arc::new(Mutex::new(0)),
        }
    }
}

struct FakeSession {
    clip_dir: PathBuf,
}

impl CaptureSession for FakeSession {
    fn stop_and_finalize(self: Box<Self>) -> livechat::Result<Option<PathBuf>> {
        Ok(Some(write_clip(&self.clip_dir)))
    }
}

impl Recorder for FakeRecorder {
    fn request_permission(&mut self) -> Permission {
        self.permission
    }

    fn configure(&mut self, _options: &RecordingOptions) -> livechat::Result<()> {
        Ok(())
    }

    fn start(&mut self, _quality: QualityPreset) -> livechat::Result<Box<dyn CaptureSession>> {
        *self.starts.lock() += 1;
        Ok(Box::new(FakeSession {
            clip_dir: self.clip_dir.clone(),
        }))
    }
}
