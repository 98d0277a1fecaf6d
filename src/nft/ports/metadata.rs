//! Token metadata retrieval.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for metadata fetches.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Fetches the JSON document a token URI points at.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetches and parses the document at `uri`.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] when the document cannot be retrieved or is
    /// not JSON.
    async fn fetch(&self, uri: &str) -> MetadataResult<Value>;
}

/// Errors returned by metadata fetchers.
#[derive(Debug, Clone, Error)]
pub enum MetadataError {
    /// The host answered with a non-success status.
    #[error("metadata host responded with status: {status}")]
    UpstreamStatus {
        /// HTTP status code.
        status: u16,
    },

    /// The request could not be delivered or the body not parsed.
    #[error("metadata request failed: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl MetadataError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
