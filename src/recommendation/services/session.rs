//! Service layer for focus-session recommendations.
//!
//! Provides [`SessionRecommendationService`], which runs the full pipeline:
//! cache lookup, task fetch, progress statistics, model call, reply
//! normalisation and cache store.

use crate::recommendation::{
    cache::ResponseCache,
    domain::{
        ModelError, PromptError, RecommendationPayload, build_completion_request, decode_reply,
    },
    ports::CompletionModel,
};
use crate::task::{
    domain::OverallProgress,
    ports::{TaskSource, TaskSourceError},
};
use mockable::Clock;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info};

/// Key under which the recommendation payload is cached.
pub const RECOMMENDATIONS_CACHE_KEY: &str = "recommendations";

/// Service-level errors for the recommendation pipeline.
#[derive(Debug, Error)]
pub enum SessionServiceError {
    /// The task database failed.
    #[error(transparent)]
    Tasks(#[from] TaskSourceError),
    /// The prompt could not be built.
    #[error(transparent)]
    Prompt(#[from] PromptError),
    /// The completion model failed or replied with an unusable payload.
    #[error(transparent)]
    Model(#[from] ModelError),
    /// The cache lock was poisoned by a panicking writer.
    #[error("recommendation cache is unavailable: {0}")]
    CacheUnavailable(String),
}

/// Result type for recommendation service operations.
pub type SessionServiceResult<T> = Result<T, SessionServiceError>;

/// Recommendation pipeline orchestration service.
///
/// Two concurrent cache misses both reach the model; whichever stores last
/// wins. The cache lock is never held across an upstream call.
pub struct SessionRecommendationService<S, M, C>
where
    S: TaskSource + ?Sized,
    M: CompletionModel + ?Sized,
    C: Clock + Send + Sync,
{
    tasks: Arc<S>,
    model: Arc<M>,
    clock: Arc<C>,
    model_name: String,
    cache: Mutex<ResponseCache<RecommendationPayload>>,
}

impl<S, M, C> SessionRecommendationService<S, M, C>
where
    S: TaskSource + ?Sized,
    M: CompletionModel + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a service with an empty cache.
    #[must_use]
    pub fn new(
        tasks: Arc<S>,
        model: Arc<M>,
        clock: Arc<C>,
        model_name: impl Into<String>,
        cache: ResponseCache<RecommendationPayload>,
    ) -> Self {
        Self {
            tasks,
            model,
            clock,
            model_name: model_name.into(),
            cache: Mutex::new(cache),
        }
    }

    /// Returns the current recommendation payload.
    ///
    /// Serves the cached payload while it is fresh; otherwise recomputes it
    /// and stores the result. Failures are never cached.
    ///
    /// # Errors
    ///
    /// Returns [`SessionServiceError`] when the task fetch, prompt build or
    /// model call fails, or when the model reply does not decode.
    pub async fn recommend(&self) -> SessionServiceResult<RecommendationPayload> {
        if let Some(cached) = self.cached()? {
            debug!("serving cached recommendations");
            return Ok(cached);
        }

        let tasks = self.tasks.fetch_tasks().await?;
        let overall_progress = OverallProgress::from_tasks(&tasks);
        let request = build_completion_request(&self.model_name, &tasks)?;
        let content = self.model.complete(&request).await?;
        let recommendations = decode_reply(&content)?;
        info!(
            tasks = tasks.len(),
            recommendations = recommendations.len(),
            "computed session recommendations"
        );

        let payload = RecommendationPayload::new(overall_progress, recommendations);
        self.store(payload.clone())?;
        Ok(payload)
    }

    fn cached(&self) -> SessionServiceResult<Option<RecommendationPayload>> {
        let now = self.clock.utc();
        Ok(self
            .lock_cache()?
            .get(RECOMMENDATIONS_CACHE_KEY, now)
            .cloned())
    }

    fn store(&self, payload: RecommendationPayload) -> SessionServiceResult<()> {
        let now = self.clock.utc();
        let mut cache = self.lock_cache()?;
        cache.set(RECOMMENDATIONS_CACHE_KEY, payload, now);
        debug!(
            ttl_secs = cache.ttl().num_seconds(),
            expires_at = ?cache.expires_at(),
            "cached session recommendations"
        );
        Ok(())
    }

    fn lock_cache(
        &self,
    ) -> SessionServiceResult<std::sync::MutexGuard<'_, ResponseCache<RecommendationPayload>>> {
        self.cache
            .lock()
            .map_err(|err| SessionServiceError::CacheUnavailable(err.to_string()))
    }
}
