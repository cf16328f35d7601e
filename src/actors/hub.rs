use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{timeout, Duration};
use tracing::{error, info, instrument, warn};

use crate::actors::messages::{AppError, HubEvent, HubMessage};
use crate::actors::responder::CannedResponder;
use crate::actors::traits::Responder;
use crate::chat::{ChatLog, ReplyScheduler};
use crate::config::HubConfig;
use crate::models::Message;
use crate::rate_limiter::RateLimiter;

/// A handle to the hub actor.
///
/// This is the primary entry point for chat traffic: it accepts user
/// messages, drives the responder, and maintains the session log.
#[derive(Clone)]
pub struct HubHandle {
    sender: mpsc::Sender<HubMessage>,
}

impl HubHandle {
    /// Spawns the production hub: welcome-seeded log, rate limiter and the
    /// canned responder behind the configured typing delay.
    ///
    /// # Arguments
    ///
    /// * `config` - Runtime configuration (delays, rate limit).
    /// * `events` - Channel the hub emits [`HubEvent`]s on, best-effort.
    pub fn new(config: &HubConfig, events: mpsc::Sender<HubEvent>) -> Self {
        let scheduler = ReplyScheduler::new(config.reply_delay(), config.reply_jitter());
        let responder = Arc::new(CannedResponder::new(scheduler));
        let limiter = RateLimiter::new(config.rate_limit, config.rate_window());
        Self::spawn_with(responder, ChatLog::with_welcome_seed(), limiter, events)
    }

    /// Spawns a hub over an arbitrary responder and initial state.
    /// Tests use this to substitute a mock responder.
    pub fn spawn_with<R: Responder>(
        responder: Arc<R>,
        log: ChatLog,
        limiter: RateLimiter,
        events: mpsc::Sender<HubEvent>,
    ) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let runner = HubRunner {
            receiver,
            responder,
            log,
            limiter,
            events,
        };
        tokio::spawn(async move { runner.run().await });
        Self { sender }
    }

    /// Processes a user message within a conversation.
    ///
    /// This is the core loop:
    /// 1. Rejects empty input and rate-limited conversations.
    /// 2. Appends the user message to the session log.
    /// 3. Emits typing events while the responder composes the reply.
    /// 4. Appends and returns the assistant reply.
    #[instrument(skip(self, content))]
    pub async fn process_message(
        &self,
        conversation_id: String,
        content: String,
    ) -> Result<Message, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = HubMessage::ProcessUserMessage {
            conversation_id,
            content,
            responder: send,
        };
        self.sender
            .send(msg)
            .await
            .map_err(|e| AppError::Internal(format!("Hub mailbox closed: {}", e)))?;
        timeout(Duration::from_secs(30), recv)
            .await?
            .map_err(|e| AppError::Internal(format!("Hub dropped the request: {}", e)))?
    }

    /// Returns a snapshot of the session log, in arrival order.
    #[instrument(skip(self))]
    pub async fn list_messages(&self) -> Result<Vec<Message>, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(HubMessage::ListMessages { responder: send })
            .await
            .map_err(|e| AppError::Internal(format!("Hub mailbox closed: {}", e)))?;
        timeout(Duration::from_secs(5), recv)
            .await?
            .map_err(|e| AppError::Internal(format!("Hub dropped the request: {}", e)))
    }
}

// --- Actor Runner ---
struct HubRunner<R>
where
    R: Responder,
{
    receiver: mpsc::Receiver<HubMessage>,
    responder: Arc<R>,
    log: ChatLog,
    limiter: RateLimiter,
    events: mpsc::Sender<HubEvent>,
}

impl<R> HubRunner<R>
where
    R: Responder,
{
    async fn run(mut self) {
        info!("Hub started");
        while let Some(msg) = self.receiver.recv().await {
            if self.handle_message(msg).await {
                break;
            }
        }
        info!("Hub stopped");
    }

    /// Returns `true` when the hub should shut down.
    async fn handle_message(&mut self, msg: HubMessage) -> bool {
        match msg {
            HubMessage::ProcessUserMessage {
                conversation_id,
                content,
                responder,
            } => {
                let result = self.handle_user_message(conversation_id, content).await;
                if let Err(e) = &result {
                    error!("Error processing user message: {:?}", e);
                }
                let _ = responder.send(result);
            }
            HubMessage::ListMessages { responder } => {
                let _ = responder.send(self.log.messages().to_vec());
            }
            HubMessage::Shutdown => {
                info!("Hub shutting down...");
                return true;
            }
        }
        false
    }

    #[instrument(skip(self, content), fields(content_len = content.len()))]
    async fn handle_user_message(
        &mut self,
        conversation_id: String,
        content: String,
    ) -> Result<Message, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::Validation(
                "Message content must not be empty".to_string(),
            ));
        }
        if let Err(e) = self.limiter.check(&conversation_id) {
            warn!(conversation_id, "send rejected by rate limiter");
            return Err(e);
        }

        let user_message = self.log.append_user(content.clone());
        self.emit(HubEvent::MessageAppended {
            id: user_message.id,
            sender: user_message.sender,
        });

        self.emit(HubEvent::TypingStarted);
        let result = self.responder.respond(content).await;
        self.emit(HubEvent::TypingStopped);

        let matched = result?;
        info!(
            intent = %matched.intent,
            matched_keyword = matched.matched_keyword.unwrap_or("-"),
            "reply selected"
        );

        let reply = self.log.append_system(matched.response.to_string());
        self.emit(HubEvent::MessageAppended {
            id: reply.id,
            sender: reply.sender,
        });

        Ok(reply)
    }

    /// Best-effort event emission; nobody listening is not an error.
    fn emit(&self, event: HubEvent) {
        let _ = self.events.try_send(event);
    }
}
