//! In-memory commit feed for tests and offline runs.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::commit_feed::{
    domain::{CommitSummary, LatestCommit},
    ports::{CommitFeed, CommitFeedError, CommitFeedResult},
};

/// Thread-safe in-memory commit feed.
///
/// Answers with preset commits. An unset commit reports
/// [`CommitFeedError::NoRepositories`], matching an account with nothing
/// pushed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommitFeed {
    state: Arc<RwLock<InMemoryFeedState>>,
}

#[derive(Debug, Default)]
struct InMemoryFeedState {
    summary: Option<CommitSummary>,
    latest: Option<LatestCommit>,
}

impl InMemoryCommitFeed {
    /// Creates an empty feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the commit returned by [`CommitFeed::latest_across_branches`].
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn set_summary(&self, summary: CommitSummary) -> CommitFeedResult<()> {
        self.write()?.summary = Some(summary);
        Ok(())
    }

    /// Sets the commit returned by [`CommitFeed::latest_on_default`].
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn set_latest(&self, latest: LatestCommit) -> CommitFeedResult<()> {
        self.write()?.latest = Some(latest);
        Ok(())
    }

    fn write(&self) -> CommitFeedResult<std::sync::RwLockWriteGuard<'_, InMemoryFeedState>> {
        self.state
            .write()
            .map_err(|err| CommitFeedError::transport(std::io::Error::other(err.to_string())))
    }

    fn read(&self) -> CommitFeedResult<std::sync::RwLockReadGuard<'_, InMemoryFeedState>> {
        self.state
            .read()
            .map_err(|err| CommitFeedError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl CommitFeed for InMemoryCommitFeed {
    async fn latest_across_branches(&self) -> CommitFeedResult<CommitSummary> {
        self.read()?
            .summary
            .clone()
            .ok_or(CommitFeedError::NoRepositories)
    }

    async fn latest_on_default(&self) -> CommitFeedResult<LatestCommit> {
        self.read()?
            .latest
            .clone()
            .ok_or(CommitFeedError::NoRepositories)
    }
}
