//! Port contracts for the commit feed.

pub mod feed;

pub use feed::{CommitFeed, CommitFeedError, CommitFeedResult};

#[cfg(test)]
pub use feed::MockCommitFeed;
