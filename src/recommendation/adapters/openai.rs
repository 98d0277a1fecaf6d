//! OpenAI chat-completions adapter for the completion model port.

use crate::config::OpenAiConfig;
use crate::recommendation::{
    domain::{ChatMessage, CompletionRequest, ModelError},
    ports::{CompletionModel, CompletionResult},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Completion model backed by the OpenAI chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiCompletionModel {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiCompletionModel {
    /// Creates an adapter sharing `client` for all requests.
    #[must_use]
    pub const fn new(client: reqwest::Client, config: OpenAiConfig) -> Self {
        Self { client, config }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CompletionModel for OpenAiCompletionModel {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<String> {
        let body = ChatCompletionBody::from_request(request);
        debug!(model = request.model(), "requesting chat completion");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(ModelError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ChatCompletionEnvelope = response
            .json()
            .await
            .map_err(|error| ModelError::SchemaMismatch(format!("completion envelope: {error}")))?;
        first_choice_content(envelope)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    response_format: ResponseFormat,
}

impl<'a> ChatCompletionBody<'a> {
    fn from_request(request: &'a CompletionRequest) -> Self {
        Self {
            model: request.model(),
            messages: request.messages(),
            response_format: ResponseFormat {
                kind: "json_object",
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionEnvelope {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

fn first_choice_content(envelope: ChatCompletionEnvelope) -> CompletionResult<String> {
    envelope
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(ModelError::EmptyReply)
}
