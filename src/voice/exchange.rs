//! Voice exchange client
//!
//! Uploads a captured clip to the voice backend and turns the JSON reply into
//! conversation entries.

use crate::integration::config::{ChatConfig, UploadConfig};
use crate::messages::{ConversationStore, Message};
use crate::speech::{self, SpeechOutput};
use crate::{LiveChatError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Reply used when the backend omits one
pub const FALLBACK_REPLY: &str = "Sorry, I had trouble understanding that.";

/// Assistant message appended when the exchange fails
pub const EXCHANGE_ERROR_REPLY: &str = "Error talking to voice server.";

#[derive(Debug, Default, Deserialize)]
struct VoiceChatResponse {
    transcript: Option<String>,
    reply: Option<String>,
}

/// Parsed result of one exchange, defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceReply {
    pub transcript: String,
    pub reply: String,
}

impl From<VoiceChatResponse> for VoiceReply {
    fn from(response: VoiceChatResponse) -> Self {
        Self {
            transcript: response.transcript.unwrap_or_default(),
            reply: response.reply.unwrap_or_else(|| FALLBACK_REPLY.to_string()),
        }
    }
}

/// Parse a response body into a reply
pub fn parse_reply(body: &[u8]) -> Result<VoiceReply> {
    let response: VoiceChatResponse = serde_json::from_slice(body)
        .map_err(|e| LiveChatError::ExchangeError(format!("Invalid response body: {}", e)))?;
    Ok(response.into())
}

#[derive(Clone)]
pub struct VoiceExchangeClient {
    client: Client,
    endpoint: String,
    upload: UploadConfig,
    store: ConversationStore,
    speech: Arc<dyn SpeechOutput>,
}

impl VoiceExchangeClient {
    pub fn new(
        endpoint: impl Into<String>,
        upload: UploadConfig,
        store: ConversationStore,
        speech: Arc<dyn SpeechOutput>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            upload,
            store,
            speech,
        }
    }

    /// Build a client from configuration
    pub fn from_config(
        config: &ChatConfig,
        store: ConversationStore,
        speech: Arc<dyn SpeechOutput>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.backend.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.voice_chat_url(),
            upload: config.upload.clone(),
            store,
            speech,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one full exchange for a captured clip.
    ///
    /// Never fails: errors become a single assistant error message.
    pub async fn exchange(&self, clip: &Path) {
        self.store.add(Message::voice_placeholder());

        match self.submit(clip).await {
            Ok(reply) => {
                info!("Voice exchange complete ({} chars transcript)", reply.transcript.len());
                let spoken = reply.reply.clone();
                self.store
                    .append([Message::user(reply.transcript), Message::assistant(reply.reply)]);
                speech::say(self.speech.as_ref(), &spoken);
            }
            Err(e) => {
                error!("Voice exchange failed: {}", e);
                let notice = e.user_message();
                self.store.add(Message::assistant(notice.as_str()));
                speech::say(self.speech.as_ref(), &notice);
            }
        }
    }

    /// Upload a clip and parse the backend's reply
    pub async fn submit(&self, clip: &Path) -> Result<VoiceReply> {
        let bytes = tokio::fs::read(clip).await.map_err(|e| {
            LiveChatError::ExchangeError(format!("Failed to read clip {}: {}", clip.display(), e))
        })?;
        debug!("Uploading {} bytes to {}", bytes.len(), self.endpoint);

        let part = Part::bytes(bytes)
            .file_name(self.upload.file_name.clone())
            .mime_str(&self.upload.mime_type)?;
        let form = Form::new().part(self.upload.field_name.clone(), part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The body is still parsed; backends report errors as JSON replies too
            warn!("Voice server responded with status {}", status);
        }

        let body = response.bytes().await?;
        parse_reply(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_reply() {
        let reply = parse_reply(br#"{"transcript":"hello","reply":"hi there"}"#).unwrap();
        assert_eq!(reply.transcript, "hello");
        assert_eq!(reply.reply, "hi there");
    }

    #[test]
    fn test_parse_missing_fields_uses_defaults() {
        let reply = parse_reply(b"{}").unwrap();
        assert_eq!(reply.transcript, "");
        assert_eq!(reply.reply, FALLBACK_REPLY);
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let reply = parse_reply(br#"{"reply":"ok","latency_ms":12}"#).unwrap();
        assert_eq!(reply.reply, "ok");
    }

    #[test]
    fn test_parse_null_fields_use_defaults() {
        let reply = parse_reply(br#"{"transcript":null,"reply":null}"#).unwrap();
        assert_eq!(reply.transcript, "");
        assert_eq!(reply.reply, FALLBACK_REPLY);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_reply(b"<html>502</html>").unwrap_err();
        assert!(matches!(err, LiveChatError::ExchangeError(_)));
    }
}
