//! Port contracts for task retrieval.

pub mod source;

pub use source::{TaskSource, TaskSourceError, TaskSourceResult};

#[cfg(test)]
pub use source::MockTaskSource;
