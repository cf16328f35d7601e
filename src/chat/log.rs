//! Append-only message store for one chat session.
//!
//! The log is an explicit, caller-owned state object: no global singleton,
//! no interior mutability. Messages are appended in arrival order, never
//! mutated, and live only as long as the log itself.

use chrono::{DateTime, Duration, Utc};
use url::Url;

use crate::models::{Message, MessageId, Platform, Sender};

const WELCOME_CONTENT: &str = "Welcome to UniConnect! I can help you manage your \
communications across all platforms. Try typing \"show whatsapp messages\" or \
\"schedule a meeting\".";

const SEED_CONTACT_NAME: &str = "Sarah Johnson";
const SEED_CONTACT_CONTENT: &str = "Hi! Just wanted to follow up on our conversation \
yesterday. Let me know when you're available to chat.";
const SEED_CONTACT_AVATAR: &str = "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop&crop=face";

const SEED_CALENDAR_CONTENT: &str =
    "You have a meeting scheduled for 3 PM today with the marketing team.";

/// In-memory, append-only store of `Message` records for one session.
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<Message>,
    /// Sequence counter feeding `MessageId::seq`; strictly increasing.
    seq: u64,
    /// High-water mark for `MessageId::timestamp_ms`, so ids stay monotonic
    /// even if the wall clock steps backwards.
    last_timestamp_ms: i64,
}

impl ChatLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log pre-seeded with the standard welcome conversation:
    /// a hub greeting, one relayed WhatsApp contact message, and a calendar
    /// notice, backdated a few minutes like a freshly opened inbox.
    pub fn with_welcome_seed() -> Self {
        let now = Utc::now();
        let mut log = Self::new();

        log.append(
            WELCOME_CONTENT.to_string(),
            Sender::System,
            now - Duration::minutes(5),
            None,
            None,
            None,
        );
        log.append(
            SEED_CONTACT_CONTENT.to_string(),
            Sender::Contact,
            now - Duration::minutes(3),
            Some(Platform::Whatsapp),
            Some(SEED_CONTACT_NAME.to_string()),
            Url::parse(SEED_CONTACT_AVATAR).ok(),
        );
        log.append(
            SEED_CALENDAR_CONTENT.to_string(),
            Sender::System,
            now - Duration::minutes(1),
            Some(Platform::Calendar),
            None,
            None,
        );

        log
    }

    /// Appends a message sent by the user. Returns the stored record.
    pub fn append_user(&mut self, content: String) -> Message {
        self.append(content, Sender::User, Utc::now(), None, None, None)
    }

    /// Appends a reply produced by the hub. Returns the stored record.
    pub fn append_system(&mut self, content: String) -> Message {
        self.append(content, Sender::System, Utc::now(), None, None, None)
    }

    /// Appends a message relayed from a contact on a platform.
    pub fn append_contact(
        &mut self,
        content: String,
        platform: Platform,
        sender_name: String,
        avatar: Option<Url>,
    ) -> Message {
        self.append(
            content,
            Sender::Contact,
            Utc::now(),
            Some(platform),
            Some(sender_name),
            avatar,
        )
    }

    fn append(
        &mut self,
        content: String,
        sender: Sender,
        timestamp: DateTime<Utc>,
        platform: Option<Platform>,
        sender_name: Option<String>,
        avatar: Option<Url>,
    ) -> Message {
        let id = self.next_id(timestamp);
        let message = Message {
            id,
            content,
            sender,
            timestamp,
            platform,
            sender_name,
            avatar,
        };
        self.messages.push(message.clone());
        message
    }

    fn next_id(&mut self, timestamp: DateTime<Utc>) -> MessageId {
        let timestamp_ms = timestamp.timestamp_millis().max(self.last_timestamp_ms);
        self.last_timestamp_ms = timestamp_ms;
        self.seq += 1;
        MessageId {
            timestamp_ms,
            seq: self.seq,
        }
    }

    /// All messages, in arrival order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recently appended message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_arrival_order() {
        let mut log = ChatLog::new();
        log.append_user("first".to_string());
        log.append_system("second".to_string());
        log.append_user("third".to_string());

        let contents: Vec<&str> = log.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let mut log = ChatLog::new();
        for i in 0..100 {
            log.append_user(format!("message {}", i));
        }

        let ids: Vec<_> = log.messages().iter().map(|m| m.id).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_welcome_seed() {
        let log = ChatLog::with_welcome_seed();

        assert_eq!(log.len(), 3);
        assert_eq!(log.messages()[0].sender, Sender::System);
        assert_eq!(log.messages()[1].sender, Sender::Contact);
        assert_eq!(log.messages()[1].platform, Some(Platform::Whatsapp));
        assert_eq!(
            log.messages()[1].sender_name.as_deref(),
            Some("Sarah Johnson")
        );
        assert!(log.messages()[1].avatar.is_some());
        assert_eq!(log.messages()[2].platform, Some(Platform::Calendar));
    }

    #[test]
    fn test_messages_are_never_mutated() {
        let mut log = ChatLog::new();
        let stored = log.append_user("hello".to_string());
        log.append_system("reply".to_string());

        assert_eq!(log.messages()[0].id, stored.id);
        assert_eq!(log.messages()[0].content, stored.content);
    }
}
