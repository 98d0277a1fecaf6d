//! Adapter implementations for the commit feed port.

pub mod github;
pub mod memory;

pub use github::GitHubCommitFeed;
pub use memory::InMemoryCommitFeed;
