pub mod storage;
pub mod types;

pub use storage::{ConversationStore, StoreEvent};
pub use types::{Message, Role, VOICE_PLACEHOLDER};
