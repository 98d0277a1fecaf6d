//! Completion model port.

use crate::recommendation::domain::{CompletionRequest, ModelError};
use async_trait::async_trait;

/// Result type for completion model operations.
pub type CompletionResult<T> = Result<T, ModelError>;

/// Contract for a chat-style completion model asked for a JSON object reply.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Sends `request` and returns the message content of the single choice.
    ///
    /// Implementations request a JSON object reply but do not inspect it;
    /// schema checks happen in [`crate::recommendation::domain::decode_reply`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UpstreamStatus`] or [`ModelError::Transport`] on
    /// delivery failures and [`ModelError::EmptyReply`] when no content came
    /// back.
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<String>;
}
