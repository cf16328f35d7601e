//! Production responder: the intent matcher behind a typing delay.

use async_trait::async_trait;

use crate::actors::messages::AppError;
use crate::actors::traits::Responder;
use crate::chat::ReplyScheduler;
use crate::matcher::MatchResult;

/// Responder that defers to the [`ReplyScheduler`] and resolves with the
/// canned reply the rule table binds to the input.
#[derive(Debug, Clone)]
pub struct CannedResponder {
    scheduler: ReplyScheduler,
}

impl CannedResponder {
    pub fn new(scheduler: ReplyScheduler) -> Self {
        Self { scheduler }
    }
}

#[async_trait]
impl Responder for CannedResponder {
    async fn respond(&self, input: String) -> Result<MatchResult, AppError> {
        self.scheduler.schedule(input).wait().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Intent;

    #[tokio::test]
    async fn test_canned_responder_resolves_with_rule_reply() {
        let responder = CannedResponder::new(ReplyScheduler::immediate());

        let result = responder.respond("check email".to_string()).await.unwrap();
        assert_eq!(result.intent, Intent::EmailSummary);
    }
}
