//! Task source port.

use crate::task::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task source operations.
pub type TaskSourceResult<T> = Result<T, TaskSourceError>;

/// Retrieval contract for the external task database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Fetches every task in the configured collection, in provider order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::UpstreamStatus`] when the provider answers
    /// with a non-success status, or transport and decode errors otherwise.
    async fn fetch_tasks(&self) -> TaskSourceResult<Vec<Task>>;
}

/// Errors returned by task source adapters.
#[derive(Debug, Clone, Error)]
pub enum TaskSourceError {
    /// The provider answered with a non-success status.
    #[error("task database responded with status: {status}")]
    UpstreamStatus {
        /// HTTP status code echoed from the provider.
        status: u16,
    },

    /// The request could not be delivered or the response not read.
    #[error("task database request failed: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The provider answered with a body that is not a query result.
    #[error("task database returned an unreadable body: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskSourceError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a body decoding error.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
