//! Unit tests for the in-memory commit feed.

use crate::commit_feed::{
    adapters::InMemoryCommitFeed,
    domain::{CommitSummary, LineStats},
    ports::{CommitFeed, CommitFeedError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_feed_reports_no_repositories() {
    let feed = InMemoryCommitFeed::new();

    assert!(matches!(
        feed.latest_across_branches().await,
        Err(CommitFeedError::NoRepositories)
    ));
    let error = feed.latest_on_default().await.expect_err("nothing pushed");
    assert_eq!(error.to_string(), "No repositories found");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn preset_summary_is_served() {
    let feed = InMemoryCommitFeed::new();
    let summary = CommitSummary::new(
        "octo/addy",
        "Add NFT room",
        "main",
        LineStats {
            additions: 1,
            deletions: 0,
        },
    );
    feed.set_summary(summary.clone()).expect("lock available");

    let served = feed.latest_across_branches().await.expect("summary set");

    assert_eq!(served, summary);
}
