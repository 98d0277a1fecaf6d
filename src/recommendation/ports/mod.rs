//! Port contracts for the completion model.

pub mod completion;

pub use completion::{CompletionModel, CompletionResult};

#[cfg(test)]
pub use completion::MockCompletionModel;
