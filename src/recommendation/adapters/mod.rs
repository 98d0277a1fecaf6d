//! Adapter implementations for the completion model port.

pub mod openai;
pub mod scripted;

pub use openai::OpenAiCompletionModel;
pub use scripted::ScriptedCompletionModel;
