//! Error types for the completion model and prompt construction.

use std::sync::Arc;
use thiserror::Error;

/// Failures talking to the completion model or reading its reply.
///
/// Transport and status failures are kept apart from reply-shape failures so
/// callers can tell a network problem from a misbehaving model.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// The model endpoint answered with a non-success status.
    #[error("completion model responded with status {status}: {body}")]
    UpstreamStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The request could not be delivered or the response not read.
    #[error("completion model request failed: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The reply carried no choice or an empty message.
    #[error("completion model returned no content")]
    EmptyReply,

    /// The reply content is not JSON.
    #[error("completion model reply is not valid JSON: {0}")]
    InvalidJson(String),

    /// The reply is JSON but does not match the recommendation schema.
    #[error("completion model reply does not match the recommendation schema: {0}")]
    SchemaMismatch(String),
}

impl ModelError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}

/// Failure building the prompt sent to the model.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PromptError {
    /// Tasks could not be serialised for embedding in the prompt.
    #[error("failed to serialise tasks for the prompt: {0}")]
    Serialise(String),

    /// The prompt template failed to render.
    #[error("failed to render the prompt template: {0}")]
    Render(String),
}
