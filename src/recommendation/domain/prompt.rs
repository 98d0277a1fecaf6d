//! Prompt construction for the completion model.

use super::PromptError;
use crate::task::domain::Task;
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed instruction describing how tasks are ranked into sessions.
///
/// The ranking rules live only here; nothing downstream re-checks them.
pub const SYSTEM_PROMPT: &str = "\
You are a productivity assistant that prioritises tasks and plans focused work sessions.
Apply these criteria in order:
1. Urgency:
   - Tasks due within 7 days are the highest priority.
   - Tasks due within a month are medium priority.
   - Tasks without a deadline are ongoing and lower priority.
2. Completion status:
   - Prefer in-progress tasks that are close to completion.
   - For tasks with low completion, suggest a shorter first session.
3. Duration:
   - Sessions last between 30 minutes and 3 hours.
   - Split tasks longer than 3 hours into several sessions.
   - Never plan more time than the task's remaining estimated hours.
Recommend the TOP 5 tasks to focus on, each with a concrete timeboxed session.
For tasks with deadlines, state the exact number of days remaining.";

const USER_TEMPLATE: &str = "\
Here are my current tasks: {{ tasks }}.
What are the top {{ limit }} tasks I should work on and in what order? \
Respond with a JSON object with the field:
- recommendations: an array of {{ limit }} objects containing:
  - taskName: the recommended task
  - sessionDuration: recommended minutes for this session
  - priority: number from 1 to 5 (1 is the highest priority)
  - reason: brief explanation of why this task was chosen
  - currentCompletion: current completion percentage of this task
  - targetCompletion: completion percentage to aim for in this session
  - deadline: the task's deadline date, or null
  - timeRemaining: days left until the deadline (e.g. \"4 days remaining\", \"Due today\" or \"No deadline\")";

/// Number of sessions the model is asked for.
const RECOMMENDATION_LIMIT: usize = 5;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// Instruction framing the conversation.
    System,
    /// End-user request.
    User,
}

impl ChatRole {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message author.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a message.
    #[must_use]
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Model-agnostic completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// Creates a request for `model`.
    #[must_use]
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
        }
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the conversation.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

/// Builds the recommendation request for `tasks`.
///
/// The task list is embedded as pretty-printed JSON in the user message.
///
/// # Errors
///
/// Returns [`PromptError`] when serialisation or template rendering fails.
pub fn build_completion_request(
    model: &str,
    tasks: &[Task],
) -> Result<CompletionRequest, PromptError> {
    let tasks_json = serde_json::to_string_pretty(tasks)
        .map_err(|error| PromptError::Serialise(error.to_string()))?;
    let user_message = Environment::new()
        .render_str(
            USER_TEMPLATE,
            context! { tasks => tasks_json, limit => RECOMMENDATION_LIMIT },
        )
        .map_err(|error| PromptError::Render(error.to_string()))?;

    Ok(CompletionRequest::new(
        model,
        vec![
            ChatMessage::new(ChatRole::System, SYSTEM_PROMPT),
            ChatMessage::new(ChatRole::User, user_message),
        ],
    ))
}
