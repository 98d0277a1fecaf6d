//! Domain model for session recommendations.
//!
//! Covers the prompt sent to the completion model, schema-checked decoding
//! of its reply and the payload returned to the client.

mod error;
mod prompt;
mod recommendation;
mod reply;

pub use error::{ModelError, PromptError};
pub use prompt::{ChatMessage, ChatRole, CompletionRequest, SYSTEM_PROMPT, build_completion_request};
pub use recommendation::{Recommendation, RecommendationPayload};
pub use reply::{decode_reply, round_half_up};
