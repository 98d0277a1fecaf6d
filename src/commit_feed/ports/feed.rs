//! Commit feed port.

use crate::commit_feed::domain::{CommitSummary, LatestCommit};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for commit feed operations.
pub type CommitFeedResult<T> = Result<T, CommitFeedError>;

/// Lookup contract for the source-control host.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommitFeed: Send + Sync {
    /// Returns the newest head commit across every branch of the most
    /// recently pushed repository.
    ///
    /// # Errors
    ///
    /// Returns [`CommitFeedError::NoRepositories`] when the user has no
    /// repositories and [`CommitFeedError::NoCommits`] when no branch has a
    /// head commit.
    async fn latest_across_branches(&self) -> CommitFeedResult<CommitSummary>;

    /// Returns the newest commit on the default branch of the most recently
    /// pushed repository.
    ///
    /// # Errors
    ///
    /// Returns [`CommitFeedError::NoRepositories`] or
    /// [`CommitFeedError::NoCommits`] when there is nothing to report.
    async fn latest_on_default(&self) -> CommitFeedResult<LatestCommit>;
}

/// Errors returned by commit feed adapters.
#[derive(Debug, Clone, Error)]
pub enum CommitFeedError {
    /// The configured user has no repositories.
    #[error("No repositories found")]
    NoRepositories,

    /// The selected repository has no commits.
    #[error("No commits found in repository")]
    NoCommits,

    /// The host answered with a non-success status.
    #[error("source-control host responded with status: {status}")]
    UpstreamStatus {
        /// HTTP status code echoed from the host.
        status: u16,
    },

    /// The request could not be delivered or the response not read.
    #[error("source-control request failed: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The host answered with an unexpected body.
    #[error("source-control host returned an unreadable body: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl CommitFeedError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a body decoding error.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
