use super::types::Message;
use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Notification sent to subscribers after the conversation changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// One append batch, ids in the order they were inserted
    Appended(Vec<Uuid>),
}

/// Ordered, append-only conversation shared between the UI and background flows
#[derive(Debug, Clone)]
pub struct ConversationStore {
    messages: Arc<RwLock<Vec<Message>>>,
    subscribers: Arc<Mutex<Vec<Sender<StoreEvent>>>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a store seeded with an assistant greeting
    pub fn with_greeting(greeting: Option<&str>) -> Self {
        let store = Self::new();
        if let Some(text) = greeting.filter(|t| !t.is_empty()) {
            store.append([Message::assistant(text)]);
        }
        store
    }

    /// Append a batch of messages.
    ///
    /// The whole batch is inserted under a single write lock, so batches
    /// issued by concurrent flows never interleave with each other.
    pub fn append<I>(&self, batch: I)
    where
        I: IntoIterator<Item = Message>,
    {
        let batch: Vec<Message> = batch.into_iter().collect();
        if batch.is_empty() {
            return;
        }

        let ids: Vec<Uuid> = batch.iter().map(|m| m.id).collect();
        {
            let mut messages = self.messages.write();
            messages.extend(batch);
            debug!("Appended {} message(s), conversation length {}", ids.len(), messages.len());
        }

        self.notify(StoreEvent::Appended(ids));
    }

    pub fn add(&self, message: Message) {
        self.append([message]);
    }

    pub fn get_all(&self) -> Vec<Message> {
        self.messages.read().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<Message> {
        self.messages.read().iter().find(|m| m.id == id).cloned()
    }

    pub fn last(&self) -> Option<Message> {
        self.messages.read().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }

    /// Subscribe to append notifications
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.lock().push(tx);
        rx
    }

    fn notify(&self, event: StoreEvent) {
        // Subscribers whose receiver was dropped are pruned here
        self.subscribers
            .lock()
            .retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Role;
    use std::thread;

    #[test]
    fn test_append_preserves_call_order() {
        let store = ConversationStore::new();
        store.append([Message::user("one"), Message::assistant("two")]);
        store.add(Message::user("three"));

        let contents: Vec<String> = store.get_all().into_iter().map(|m| m.content).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_empty_batch_is_ignored() {
        let store = ConversationStore::new();
        let rx = store.subscribe();
        store.append(Vec::new());
        assert!(store.is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_greeting_seed() {
        let store = ConversationStore::with_greeting(Some("Hello there"));
        assert_eq!(store.len(), 1);
        let first = store.last().unwrap();
        assert_eq!(first.role, Role::Assistant);
        assert_eq!(first.content, "Hello there");

        assert!(ConversationStore::with_greeting(None).is_empty());
        assert!(ConversationStore::with_greeting(Some("")).is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let store = ConversationStore::new();
        let msg = Message::user("find me");
        let id = msg.id;
        store.add(msg);
        assert_eq!(store.get(id).map(|m| m.content), Some("find me".to_string()));
        assert!(store.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_subscribers_receive_batches() {
        let store = ConversationStore::new();
        let rx = store.subscribe();

        let a = Message::user("a");
        let b = Message::assistant("b");
        let ids = vec![a.id, b.id];
        store.append([a, b]);

        assert_eq!(rx.try_recv().unwrap(), StoreEvent::Appended(ids));
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let store = ConversationStore::new();
        let rx = store.subscribe();
        drop(rx);
        store.add(Message::user("x"));
        assert!(store.subscribers.lock().is_empty());
    }

    #[test]
    fn test_concurrent_batches_stay_contiguous() {
        let store = ConversationStore::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                thread::spawn(move || {
                    for j in 0..50 {
                        store.append([
                            Message::user(format!("{i}-{j}-q")),
                            Message::assistant(format!("{i}-{j}-a")),
                        ]);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let messages = store.get_all();
        assert_eq!(messages.len(), 8 * 50 * 2);
        for pair in messages.chunks(2) {
            let question = pair[0].content.trim_end_matches("-q");
            let answer = pair[1].content.trim_end_matches("-a");
            assert_eq!(question, answer);
        }
    }
}
