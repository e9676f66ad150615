pub mod audio;
pub mod chat;
pub mod integration;
pub mod messages;
pub mod speech;
pub mod ui;
pub mod voice;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum LiveChatError {
    #[error("Audio device error: {0}")]
    AudioDeviceError(String),

    #[error("Microphone permission denied")]
    PermissionDenied,

    #[error("Capture error: {0}")]
    CaptureError(String),

    #[error("Voice exchange error: {0}")]
    ExchangeError(String),

    #[error("IO error: {0}")]
    IOError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<std::io::Error> for LiveChatError {
    fn from(e: std::io::Error) -> Self {
        LiveChatError::IOError(e.to_string())
    }
}

impl From<reqwest::Error> for LiveChatError {
    fn from(e: reqwest::Error) -> Self {
        LiveChatError::ExchangeError(e.to_string())
    }
}

impl LiveChatError {
    /// Text shown to the user for this error
    pub fn user_message(&self) -> String {
        match self {
            LiveChatError::AudioDeviceError(_) => {
                "Audio device error. Please check your microphone.".to_string()
            }
            LiveChatError::PermissionDenied => "Microphone access is needed to record.".to_string(),
            LiveChatError::CaptureError(_) => "Recording failed. Please try again.".to_string(),
            LiveChatError::ExchangeError(_) => voice::EXCHANGE_ERROR_REPLY.to_string(),
            LiveChatError::IOError(_) => "File system error occurred.".to_string(),
            LiveChatError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LiveChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_errors_share_one_message() {
        let timeout = LiveChatError::ExchangeError("timeout".into());
        let bad_body = LiveChatError::ExchangeError("Invalid response body".into());
        assert_eq!(timeout.user_message(), "Error talking to voice server.");
        assert_eq!(timeout.user_message(), bad_body.user_message());
    }

    #[test]
    fn test_permission_denied_message() {
        assert_eq!(
            LiveChatError::PermissionDenied.user_message(),
            "Microphone access is needed to record."
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let err: LiveChatError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing clip").into();
        assert!(matches!(err, LiveChatError::IOError(ref msg) if msg.contains("missing clip")));
    }
}
