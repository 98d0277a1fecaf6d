//! Scripted completion model for tests and offline runs.

use crate::recommendation::{
    domain::{CompletionRequest, ModelError},
    ports::{CompletionModel, CompletionResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Completion model that answers every request with a preset reply.
///
/// Records each request it receives so tests can inspect prompts and count
/// invocations.
#[derive(Debug, Clone)]
pub struct ScriptedCompletionModel {
    state: Arc<RwLock<ScriptedState>>,
}

#[derive(Debug)]
struct ScriptedState {
    reply: CompletionResult<String>,
    requests: Vec<CompletionRequest>,
}

impl ScriptedCompletionModel {
    /// Creates a model that always replies with `content`.
    #[must_use]
    pub fn replying(content: impl Into<String>) -> Self {
        Self::with_reply(Ok(content.into()))
    }

    /// Creates a model that always fails with `error`.
    #[must_use]
    pub fn failing(error: ModelError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: CompletionResult<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(ScriptedState {
                reply,
                requests: Vec::new(),
            })),
        }
    }

    /// Replaces the reply served to subsequent requests.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn set_reply(&self, reply: CompletionResult<String>) -> CompletionResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ModelError::transport(std::io::Error::other(err.to_string())))?;
        state.reply = reply;
        Ok(())
    }

    /// Returns the number of requests received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.state.read().map_or(0, |state| state.requests.len())
    }

    /// Returns a copy of every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.state
            .read()
            .map(|state| state.requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionModel for ScriptedCompletionModel {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<String> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ModelError::transport(std::io::Error::other(err.to_string())))?;
        state.requests.push(request.clone());
        state.reply.clone()
    }
}
