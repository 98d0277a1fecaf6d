//! HTTP client for the Addy server's commit routes.
//!
//! Lets the terminal client reuse the [`CommitFeed`] port against a running
//! server instead of calling the source-control host directly.

use crate::commit_feed::{
    domain::{CommitSummary, LatestCommit},
    ports::{CommitFeed, CommitFeedError, CommitFeedResult},
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Default server the terminal client talks to.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Commit feed served by an Addy server.
#[derive(Debug, Clone)]
pub struct ServerCommitFeed {
    client: reqwest::Client,
    base_url: String,
}

impl ServerCommitFeed {
    /// Creates a client for the server at `base_url`.
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, route: &str) -> String {
        format!("{}{route}", self.base_url.trim_end_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, route: &str) -> CommitFeedResult<T> {
        let response = self
            .client
            .get(self.url(route))
            .send()
            .await
            .map_err(CommitFeedError::transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CommitFeedError::UpstreamStatus {
                status: status.as_u16(),
            });
        }
        response.json().await.map_err(CommitFeedError::decode)
    }
}

#[async_trait]
impl CommitFeed for ServerCommitFeed {
    async fn latest_across_branches(&self) -> CommitFeedResult<CommitSummary> {
        self.get_json("/github-commits").await
    }

    async fn latest_on_default(&self) -> CommitFeedResult<LatestCommit> {
        self.get_json("/github-latest").await
    }
}
