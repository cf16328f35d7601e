use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;
use validator::Validate;

/// The source platform a message or conversation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Whatsapp,
    Email,
    Linkedin,
    Calendar,
}

impl Platform {
    /// Returns the stable identifier used in config, filters and storage.
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Whatsapp => "whatsapp",
            Platform::Email => "email",
            Platform::Linkedin => "linkedin",
            Platform::Calendar => "calendar",
        }
    }

    /// Parses the stable identifier back into a platform.
    pub fn from_id(id: &str) -> Option<Platform> {
        Platform::all().into_iter().find(|p| p.id() == id)
    }

    /// All supported platforms, in display order.
    pub fn all() -> [Platform; 4] {
        [
            Platform::Whatsapp,
            Platform::Email,
            Platform::Linkedin,
            Platform::Calendar,
        ]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() honors width/alignment flags, so tabular output lines up.
        f.pad(self.id())
    }
}

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The signed-in user.
    User,
    /// The hub itself (canned assistant replies, calendar notices).
    System,
    /// A remote contact relayed from a connected platform.
    Contact,
}

/// Unique, monotonically increasing message identifier.
///
/// Millisecond creation time plus a per-log sequence number: two messages
/// created in the same millisecond still order and compare distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId {
    pub timestamp_ms: i64,
    pub seq: u64,
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.timestamp_ms, self.seq)
    }
}

/// A single message in the unified inbox.
///
/// Messages are created on send or on a generated reply and never mutated.
/// They live for the session only; there is no message persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier, monotonic within a `ChatLog`.
    pub id: MessageId,
    /// The text content of the message.
    pub content: String,
    /// Who produced the message.
    pub sender: Sender,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    /// Source platform, when the message was relayed from one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Display name of the sender, for contact messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    /// Avatar URL of the sender, when one is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Url>,
}

/// A conversation entry in the sidebar directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier for the conversation.
    pub id: String,
    /// Display name (contact, group, or mailbox address).
    pub name: String,
    /// Preview of the most recent message.
    pub last_message: String,
    /// Time of the most recent activity.
    pub timestamp: DateTime<Utc>,
    /// Number of unread messages.
    pub unread: u32,
    /// Platform the conversation lives on.
    pub platform: Platform,
    /// Avatar URL, when one is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Url>,
    /// Whether the contact is currently online.
    #[serde(default)]
    pub is_online: bool,
}

/// UI theme preference stored on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

/// The signed-in user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    /// Unique identifier for the user (UUID).
    pub id: String,
    /// Display name.
    #[validate(length(min = 1))]
    pub username: String,
    /// Email address used to sign in.
    #[validate(email)]
    pub email: String,
    /// Profile picture URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<Url>,
    /// UI theme preference.
    #[serde(default)]
    pub theme: Theme,
}

/// A partial profile edit; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 1))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub profile_picture: Option<Url>,
    pub theme: Option<Theme>,
}
