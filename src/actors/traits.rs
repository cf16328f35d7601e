use crate::actors::messages::AppError;
use crate::matcher::MatchResult;
use async_trait::async_trait;

/// Defines the public interface for a responder.
///
/// This trait abstracts how assistant replies are produced, allowing the
/// production canned-rule responder and test mocks to be used interchangeably
/// by the hub.
#[async_trait]
pub trait Responder: Send + Sync + 'static {
    /// Produces the reply for a user input, resolving once it is ready.
    async fn respond(&self, input: String) -> Result<MatchResult, AppError>;
}
