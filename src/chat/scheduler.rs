//! Deferred canned-reply tasks.
//!
//! The assistant reply is produced after a cosmetic typing delay. The delay
//! is an explicit task on the tokio timer with an observable completion
//! event and cancellation, not an implicit callback; it carries no ordering
//! or correctness guarantee.

use rand::Rng;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

use crate::actors::messages::ActorError;
use crate::error::AppError;
use crate::matcher::{IntentMatcher, MatchResult};

/// Schedules classification of user input after a typing delay.
#[derive(Debug, Clone)]
pub struct ReplyScheduler {
    base_delay: Duration,
    jitter: Duration,
}

impl ReplyScheduler {
    /// # Arguments
    ///
    /// * `base_delay` - Minimum delay before the reply completes.
    /// * `jitter` - Maximum random extra delay added on top of `base_delay`.
    pub fn new(base_delay: Duration, jitter: Duration) -> Self {
        Self { base_delay, jitter }
    }

    /// A scheduler that replies immediately. Used by tests.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    fn pick_delay(&self) -> Duration {
        if self.jitter.is_zero() {
            return self.base_delay;
        }
        let extra_ms = rand::thread_rng().gen_range(0..=self.jitter.as_millis() as u64);
        self.base_delay + Duration::from_millis(extra_ms)
    }

    /// Spawns a deferred task that classifies `input` once the delay elapses.
    ///
    /// The returned `PendingReply` resolves with the match result, or with
    /// an error if the task is cancelled first.
    pub fn schedule(&self, input: String) -> PendingReply {
        let delay = self.pick_delay();
        let (completion, receiver) = oneshot::channel();

        let handle: JoinHandle<()> = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let result = IntentMatcher::new().classify_detailed(&input);
            debug!(intent = %result.intent, "deferred reply ready");
            // Receiver may have been dropped; the reply is then discarded.
            let _ = completion.send(result);
        });

        PendingReply { handle, receiver }
    }
}

/// A scheduled reply that has not completed yet.
#[derive(Debug)]
pub struct PendingReply {
    handle: JoinHandle<()>,
    receiver: oneshot::Receiver<MatchResult>,
}

impl PendingReply {
    /// Handle for cancelling the task from elsewhere while `wait` is pending.
    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.abort_handle()
    }

    /// Cancels the task. The reply will never be produced.
    pub fn cancel(self) {
        self.handle.abort();
    }

    /// Waits for the deferred reply to complete.
    pub async fn wait(self) -> Result<MatchResult, AppError> {
        self.receiver
            .await
            .map_err(|_| AppError::Actor(ActorError::Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Intent;

    #[tokio::test]
    async fn test_scheduled_reply_completes() {
        let scheduler = ReplyScheduler::new(Duration::from_millis(5), Duration::ZERO);

        let result = scheduler
            .schedule("show whatsapp messages".to_string())
            .wait()
            .await
            .unwrap();

        assert_eq!(result.intent, Intent::WhatsappSummary);
    }

    #[tokio::test]
    async fn test_cancelled_reply_is_never_produced() {
        let scheduler = ReplyScheduler::new(Duration::from_secs(60), Duration::ZERO);

        let pending = scheduler.schedule("help".to_string());
        let abort = pending.abort_handle();
        abort.abort();

        let result = pending.wait().await;
        assert!(matches!(
            result,
            Err(AppError::Actor(ActorError::Cancelled))
        ));
    }

    #[tokio::test]
    async fn test_immediate_scheduler_falls_back_on_empty_input() {
        let scheduler = ReplyScheduler::immediate();

        let result = scheduler.schedule("   ".to_string()).wait().await.unwrap();
        assert_eq!(result.intent, Intent::Fallback);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_elapses_before_reply() {
        let scheduler = ReplyScheduler::new(Duration::from_millis(1500), Duration::ZERO);

        let pending = scheduler.schedule("help".to_string());
        // Paused clock: the sleep only completes once time is advanced.
        tokio::time::advance(Duration::from_millis(1500)).await;
        let result = pending.wait().await.unwrap();

        assert_eq!(result.intent, Intent::Help);
    }
}
