//! Domain model for commit summaries.

mod commit;

pub use commit::{BranchHead, CommitStats, CommitSummary, LatestCommit, LineStats, newest_head};
