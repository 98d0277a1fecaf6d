//! Latest-commit lookup on the source-control host.
//!
//! Finds the most recently pushed repository of the configured user and
//! reports either the newest head across all of its branches or the newest
//! commit on its default branch.

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
