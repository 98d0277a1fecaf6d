//! Mapping of context errors onto HTTP responses.

use super::request::ApiResponse;
use crate::commit_feed::ports::CommitFeedError;
use crate::nft::services::NftServiceError;
use crate::recommendation::services::SessionServiceError;
use crate::task::ports::TaskSourceError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matches the method and path.
    #[error("not found")]
    NotFound,

    /// Task retrieval failed.
    #[error(transparent)]
    Tasks(#[from] TaskSourceError),

    /// The recommendation pipeline failed.
    #[error(transparent)]
    Recommendations(#[from] SessionServiceError),

    /// The commit lookup failed.
    #[error(transparent)]
    Commits(#[from] CommitFeedError),

    /// The holdings lookup failed or the request was invalid.
    #[error(transparent)]
    Holdings(#[from] NftServiceError),

    /// A payload could not be rendered as JSON.
    #[error("failed to serialise response: {0}")]
    Serialise(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    ///
    /// Every upstream and validation failure is reported as 500, matching
    /// what existing clients expect.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            _ => 500,
        }
    }

    /// Renders the error as an `{error: message}` response.
    #[must_use]
    pub fn to_response(&self) -> ApiResponse {
        ApiResponse::json(self.status(), json!({ "error": self.to_string() }))
    }
}
