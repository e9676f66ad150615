//! Integration layer: configuration and background wiring

pub mod config;
pub mod orchestrator;

pub use config::{BackendConfig, ChatConfig, SpeechConfig, Target, UploadConfig};
pub use orchestrator::{build_speech, ExchangeWorker};
