//! Route table for the aggregation API.

use super::error::ApiError;
use super::request::{ApiMethod, ApiRequest, ApiResponse};
use crate::commit_feed::ports::CommitFeed;
use crate::nft::{
    ports::{Erc721Reader, MetadataFetcher},
    services::NftHoldingsService,
};
use crate::recommendation::{ports::CompletionModel, services::SessionRecommendationService};
use crate::task::ports::TaskSource;
use mockable::Clock;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, error};

/// Recommendation service over type-erased ports.
pub type DynRecommendationService<C> =
    SessionRecommendationService<dyn TaskSource, dyn CompletionModel, C>;

/// Holdings service over type-erased ports.
pub type DynHoldingsService = NftHoldingsService<dyn Erc721Reader, dyn MetadataFetcher>;

/// Collaborators the router dispatches to.
pub struct ApiServices<C>
where
    C: Clock + Send + Sync,
{
    /// Task source backing `/notion-data`.
    pub tasks: Arc<dyn TaskSource>,
    /// Pipeline backing `/recommend-session`.
    pub recommendations: Arc<DynRecommendationService<C>>,
    /// Feed backing `/github-commits` and `/github-latest`.
    pub commits: Arc<dyn CommitFeed>,
    /// Lookup backing `/nft-holdings`.
    pub holdings: Arc<DynHoldingsService>,
}

/// Maps requests onto services and errors onto responses.
pub struct ApiRouter<C>
where
    C: Clock + Send + Sync,
{
    services: ApiServices<C>,
}

impl<C> ApiRouter<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a router over `services`.
    #[must_use]
    pub const fn new(services: ApiServices<C>) -> Self {
        Self { services }
    }

    /// Handles one request. Never fails: errors become JSON responses.
    pub async fn handle(&self, request: &ApiRequest) -> ApiResponse {
        if request.method() == &ApiMethod::Options {
            return ApiResponse::no_content();
        }

        match self.dispatch(request).await {
            Ok(body) => ApiResponse::json(200, body),
            Err(ApiError::NotFound) => {
                debug!(method = request.method().as_str(), path = request.path(), "no route");
                ApiError::NotFound.to_response()
            }
            Err(failure) => {
                error!(path = request.path(), error = %failure, "request failed");
                failure.to_response()
            }
        }
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        if request.method() != &ApiMethod::Get {
            return Err(ApiError::NotFound);
        }

        let services = &self.services;
        let body = match route_path(request.path()) {
            "/health" => json!({ "status": "ok" }),
            "/notion-data" => serde_json::to_value(services.tasks.fetch_tasks().await?)?,
            "/recommend-session" => {
                serde_json::to_value(services.recommendations.recommend().await?)?
            }
            "/github-commits" => {
                serde_json::to_value(services.commits.latest_across_branches().await?)?
            }
            "/github-latest" => serde_json::to_value(services.commits.latest_on_default().await?)?,
            "/nft-holdings" => serde_json::to_value(
                services
                    .holdings
                    .holdings(request.query("walletAddress"))
                    .await?,
            )?,
            _ => return Err(ApiError::NotFound),
        };
        Ok(body)
    }
}

/// Drops one trailing slash so `/health/` routes like `/health`.
fn route_path(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}
