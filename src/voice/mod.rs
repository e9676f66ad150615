//! Voice message path: capture, upload, reply

pub mod capture;
pub mod exchange;

pub use capture::{Alert, CaptureState, VoiceCapture};
pub use exchange::{
    parse_reply, VoiceExchangeClient, VoiceReply, EXCHANGE_ERROR_REPLY, FALLBACK_REPLY,
};
