//! GitHub REST adapter for the commit feed port.
//!
//! Both lookups start from the user's most recently pushed repository. The
//! branch-wide lookup fetches every branch head concurrently, which is the
//! only fan-out in the server.

use crate::commit_feed::{
    domain::{BranchHead, CommitStats, CommitSummary, LatestCommit, LineStats, newest_head},
    ports::{CommitFeed, CommitFeedError, CommitFeedResult},
};
use crate::app::USER_AGENT;
use crate::config::GitHubConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;
use urlencoding::encode;

const ACCEPT: &str = "application/vnd.github+json";

/// Commit feed backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubCommitFeed {
    client: reqwest::Client,
    config: GitHubConfig,
}

impl GitHubCommitFeed {
    /// Creates an adapter sharing `client` for all requests.
    #[must_use]
    pub const fn new(client: reqwest::Client, config: GitHubConfig) -> Self {
        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_base.trim_end_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> CommitFeedResult<T> {
        let mut request = self
            .client
            .get(self.url(path))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, ACCEPT);
        if !self.config.token.is_empty() {
            request = request.bearer_auth(&self.config.token);
        }

        let response = request.send().await.map_err(CommitFeedError::transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CommitFeedError::UpstreamStatus {
                status: status.as_u16(),
            });
        }
        response.json().await.map_err(CommitFeedError::decode)
    }

    async fn latest_repo(&self) -> CommitFeedResult<RepoRef> {
        let path = format!(
            "/users/{}/repos?sort=pushed&direction=desc&per_page=1",
            encode(&self.config.username)
        );
        let repos: Vec<RepoRecord> = self.get_json(&path).await?;
        repos
            .into_iter()
            .next()
            .map(RepoRef::from)
            .ok_or(CommitFeedError::NoRepositories)
    }

    async fn branch_head(
        &self,
        repo: &RepoRef,
        branch: String,
    ) -> CommitFeedResult<Option<BranchHead>> {
        let path = format!(
            "{}/commits?sha={}&per_page=1",
            repo.api_path(),
            encode(&branch)
        );
        let commits: Vec<CommitRecord> = self.get_json(&path).await?;
        Ok(commits.into_iter().next().map(|commit| BranchHead {
            branch,
            sha: commit.sha,
            committed_at: commit.commit.committer.date,
        }))
    }

    async fn commit_detail(&self, repo: &RepoRef, sha: &str) -> CommitFeedResult<CommitRecord> {
        let path = format!("{}/commits/{}", repo.api_path(), encode(sha));
        self.get_json(&path).await
    }
}

#[async_trait]
impl CommitFeed for GitHubCommitFeed {
    async fn latest_across_branches(&self) -> CommitFeedResult<CommitSummary> {
        let repo = self.latest_repo().await?;
        let branches: Vec<BranchRecord> = self
            .get_json(&format!("{}/branches", repo.api_path()))
            .await?;
        debug!(repo = %repo.full_name(), branches = branches.len(), "listing branch heads");

        let heads: Vec<BranchHead> = try_join_all(
            branches
                .into_iter()
                .map(|branch| self.branch_head(&repo, branch.name)),
        )
        .await?
        .into_iter()
        .flatten()
        .collect();

        let newest = newest_head(&heads).ok_or(CommitFeedError::NoCommits)?;
        let detail = self.commit_detail(&repo, &newest.sha).await?;
        Ok(CommitSummary::new(
            repo.full_name(),
            detail.commit.message,
            newest.branch.clone(),
            detail.stats.unwrap_or_default().into(),
        ))
    }

    async fn latest_on_default(&self) -> CommitFeedResult<LatestCommit> {
        let repo = self.latest_repo().await?;
        let commits: Vec<CommitRecord> = self
            .get_json(&format!("{}/commits?per_page=1", repo.api_path()))
            .await?;
        let head = commits
            .into_iter()
            .next()
            .ok_or(CommitFeedError::NoCommits)?;

        let detail = self.commit_detail(&repo, &head.sha).await?;
        Ok(latest_commit(&repo, detail))
    }
}

fn latest_commit(repo: &RepoRef, detail: CommitRecord) -> LatestCommit {
    let CommitRecord {
        commit,
        stats,
        html_url,
        ..
    } = detail;
    LatestCommit::new(
        repo.full_name(),
        commit.message,
        commit.committer.date,
        stats.unwrap_or_default().into(),
    )
    .with_url(html_url)
    .with_author(commit.author.map(|author| author.name).unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RepoRef {
    owner: String,
    name: String,
}

impl RepoRef {
    fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    fn api_path(&self) -> String {
        format!("/repos/{}/{}", encode(&self.owner), encode(&self.name))
    }
}

impl From<RepoRecord> for RepoRef {
    fn from(record: RepoRecord) -> Self {
        Self {
            owner: record.owner.login,
            name: record.name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RepoRecord {
    name: String,
    owner: OwnerRecord,
}

#[derive(Debug, Deserialize)]
struct OwnerRecord {
    login: String,
}

#[derive(Debug, Deserialize)]
struct BranchRecord {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CommitRecord {
    sha: String,
    commit: CommitBody,
    stats: Option<StatsRecord>,
    #[serde(default)]
    html_url: String,
}

#[derive(Debug, Deserialize)]
struct CommitBody {
    #[serde(default)]
    message: String,
    committer: Signature,
    author: Option<AuthorSignature>,
}

#[derive(Debug, Deserialize)]
struct Signature {
    date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct AuthorSignature {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct StatsRecord {
    #[serde(default)]
    additions: u64,
    #[serde(default)]
    deletions: u64,
    #[serde(default)]
    total: u64,
}

impl From<StatsRecord> for CommitStats {
    fn from(stats: StatsRecord) -> Self {
        Self {
            additions: stats.additions,
            deletions: stats.deletions,
            total: stats.total,
        }
    }
}

impl From<StatsRecord> for LineStats {
    fn from(stats: StatsRecord) -> Self {
        CommitStats::from(stats).into()
    }
}
