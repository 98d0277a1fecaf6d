//! Commit summaries returned by the feed routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Line counts for a commit, without the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    /// Lines added.
    pub additions: u64,
    /// Lines deleted.
    pub deletions: u64,
}

/// Line counts for a commit, including the host-reported total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStats {
    /// Lines added.
    pub additions: u64,
    /// Lines deleted.
    pub deletions: u64,
    /// Total lines changed.
    pub total: u64,
}

impl From<CommitStats> for LineStats {
    fn from(stats: CommitStats) -> Self {
        Self {
            additions: stats.additions,
            deletions: stats.deletions,
        }
    }
}

/// Newest commit across every branch of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    repo: String,
    message: String,
    branch: String,
    stats: LineStats,
}

impl CommitSummary {
    /// Creates a summary for `repo` (in `owner/name` form).
    #[must_use]
    pub fn new(
        repo: impl Into<String>,
        message: impl Into<String>,
        branch: impl Into<String>,
        stats: LineStats,
    ) -> Self {
        Self {
            repo: repo.into(),
            message: message.into(),
            branch: branch.into(),
            stats,
        }
    }

    /// Returns the repository in `owner/name` form.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Returns the full commit message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the branch whose head this commit is.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Returns the line counts.
    #[must_use]
    pub const fn stats(&self) -> LineStats {
        self.stats
    }
}

/// Newest commit on the default branch, with author and link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestCommit {
    repo: String,
    message: String,
    date: DateTime<Utc>,
    stats: CommitStats,
    url: String,
    author: String,
}

impl LatestCommit {
    /// Creates a latest-commit record.
    #[must_use]
    pub fn new(
        repo: impl Into<String>,
        message: impl Into<String>,
        date: DateTime<Utc>,
        stats: CommitStats,
    ) -> Self {
        Self {
            repo: repo.into(),
            message: message.into(),
            date,
            stats,
            url: String::new(),
            author: String::new(),
        }
    }

    /// Sets the web link to the commit.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the author display name.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Returns the repository in `owner/name` form.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Returns the full commit message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the committer timestamp.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Returns the line counts.
    #[must_use]
    pub const fn stats(&self) -> CommitStats {
        self.stats
    }

    /// Returns the web link to the commit.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the author display name.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }
}

/// Head commit of one branch, as listed before stats are fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchHead {
    /// Branch name.
    pub branch: String,
    /// Commit SHA at the head of the branch.
    pub sha: String,
    /// Committer timestamp of the head commit.
    pub committed_at: DateTime<Utc>,
}

/// Picks the head with the latest committer date.
///
/// Ties keep the earliest-listed head.
#[must_use]
pub fn newest_head(heads: &[BranchHead]) -> Option<&BranchHead> {
    heads.iter().reduce(|latest, current| {
        if current.committed_at > latest.committed_at {
            current
        } else {
            latest
        }
    })
}
