//! Domain model for normalised tasks and their aggregate progress.
//!
//! Tasks are transient: they are fetched from the provider on every request
//! and never persisted.

mod progress;
mod task;

pub use progress::OverallProgress;
pub use task::{Task, TaskStage};
