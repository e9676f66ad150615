//! Configuration for the chat screen
//!
//! Loaded from a TOML file in the platform config directory; every field has
//! a default so a missing file yields a working setup.

use crate::audio::RecordingOptions;
use crate::{LiveChatError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Greeting shown as the first assistant message
pub const DEFAULT_GREETING: &str = "Hi! I’m your GPT Live prototype. Type to chat.";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "LIVECHAT_CONFIG";

/// Deployment target, selects the backend base address
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Browser-hosted build, talks to a loopback backend
    Browser,
    /// Native build on a device, talks to a LAN backend
    #[default]
    Native,
}

/// Backend addresses, one per deployment target
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub browser_base_url: String,
    pub native_base_url: String,
    /// Request timeout; no timeout when unset
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            browser_base_url: "http://localhost:8000".to_string(),
            native_base_url: "http://192.168.1.10:8000".to_string(),
            timeout_secs: None,
        }
    }
}

impl BackendConfig {
    pub fn base_url(&self, target: Target) -> &str {
        match target {
            Target::Browser => &self.browser_base_url,
            Target::Native => &self.native_base_url,
        }
    }

    /// Full voice-chat endpoint for a target
    pub fn voice_chat_url(&self, target: Target) -> String {
        format!("{}/voice-chat", self.base_url(target).trim_end_matches('/'))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Naming of the multipart part carrying the clip
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub field_name: String,
    pub file_name: String,
    pub mime_type: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            field_name: "audio".to_string(),
            file_name: "audio.m4a".to_string(),
            mime_type: "audio/m4a".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    /// TTS program; platform default when unset
    pub command: Option<String>,
    pub args: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
            args: Vec::new(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub target: Target,
    /// Greeting text; an empty string disables it
    pub greeting: String,
    pub backend: BackendConfig,
    pub upload: UploadConfig,
    pub recording: RecordingOptions,
    pub speech: SpeechConfig,
    /// Directory for recorded clips; system temp dir when unset
    pub clip_dir: Option<PathBuf>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            target: Target::default(),
            greeting: DEFAULT_GREETING.to_string(),
            backend: BackendConfig::default(),
            upload: UploadConfig::default(),
            recording: RecordingOptions::default(),
            speech: SpeechConfig::default(),
            clip_dir: None,
        }
    }
}

impl ChatConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LiveChatError::ConfigError(e.to_string()))
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LiveChatError::ConfigError(format!("{}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
            .map_err(|e| LiveChatError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("livechat").join("config.toml"))
    }

    /// Load from `$LIVECHAT_CONFIG`, else the default location, else defaults
    pub fn discover() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Self::load(PathBuf::from(path));
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                info!("Loading config from {}", path.display());
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        match self.target {
            Target::Browser => self.backend.browser_base_url = base_url,
            Target::Native => self.backend.native_base_url = base_url,
        }
        self
    }

    pub fn without_greeting(mut self) -> Self {
        self.greeting.clear();
        self
    }

    pub fn without_speech(mut self) -> Self {
        self.speech.enabled = false;
        self
    }

    pub fn greeting(&self) -> Option<&str> {
        Some(self.greeting.as_str()).filter(|g| !g.is_empty())
    }

    /// Endpoint for the configured target
    pub fn voice_chat_url(&self) -> String {
        self.backend.voice_chat_url(self.target)
    }

    pub fn clip_dir(&self) -> PathBuf {
        self.clip_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("livechat"))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let base = self.backend.base_url(self.target);
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(LiveChatError::ConfigError(format!(
                "Backend base URL must be http(s): {:?}",
                base
            )));
        }

        if self.upload.field_name.is_empty() || self.upload.file_name.is_empty() {
            return Err(LiveChatError::ConfigError(
                "Upload field and file names are required".to_string(),
            ));
        }

        if !self.upload.mime_type.contains('/') {
            return Err(LiveChatError::ConfigError(format!(
                "Invalid upload MIME type: {:?}",
                self.upload.mime_type
            )));
        }

        Ok(())
    }
}
