use serde::Serialize;
use tokio::sync::oneshot;

use crate::models::{Message, MessageId, Sender};

/// Defines errors that can occur within the actor system.
#[derive(Debug, thiserror::Error, Serialize, Clone)]
pub enum ActorError {
    /// An error originating from the responder.
    #[error("Responder request failed: {0}")]
    Responder(String),
    /// A generic internal error within an actor.
    #[error("Internal system error: {0}")]
    Internal(String),
    /// An error indicating that an actor operation timed out.
    #[error("Operation timed out: {0}")]
    Timeout(String),
    /// The deferred task backing an operation was cancelled.
    #[error("Operation was cancelled")]
    Cancelled,
}

impl From<tokio::time::error::Elapsed> for ActorError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        ActorError::Timeout(format!("Actor operation timed out: {}", err))
    }
}

// Re-export AppError for convenience
pub use crate::error::AppError;

/// Messages that can be sent to the hub actor.
#[derive(Debug)]
pub enum HubMessage {
    /// A request to process a user's message within a conversation.
    ProcessUserMessage {
        conversation_id: String,
        content: String,
        /// A channel to send the appended assistant reply back.
        responder: oneshot::Sender<Result<Message, AppError>>,
    },
    /// A request for a snapshot of the session log, in arrival order.
    ListMessages {
        responder: oneshot::Sender<Vec<Message>>,
    },
    /// A command to shut down the hub.
    #[allow(dead_code)]
    Shutdown,
}

/// Events emitted by the hub for observers (the typing indicator, renderers).
///
/// Best-effort: events are dropped if nobody is draining the channel.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HubEvent {
    /// The assistant started composing a reply.
    TypingStarted,
    /// The assistant stopped composing (reply ready or failed).
    TypingStopped,
    /// A message was appended to the session log.
    MessageAppended { id: MessageId, sender: Sender },
}
