//! Composition root: builds adapters and services from configuration.

use crate::commit_feed::{adapters::GitHubCommitFeed, ports::CommitFeed};
use crate::config::AddyConfig;
use crate::http::router::{ApiRouter, ApiServices};
use crate::nft::{
    adapters::{HttpMetadataFetcher, JsonRpcErc721Reader},
    domain::{Address, ValidationError},
    ports::{Erc721Reader, MetadataFetcher},
    services::NftHoldingsService,
};
use crate::recommendation::{
    adapters::OpenAiCompletionModel, cache::ResponseCache, ports::CompletionModel,
    services::SessionRecommendationService,
};
use crate::task::{adapters::NotionTaskSource, ports::TaskSource};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// User agent sent on every outbound request.
pub const USER_AGENT: &str = concat!("addy/", env!("CARGO_PKG_VERSION"));

/// Errors assembling the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// The outbound HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// The configured contract address is malformed.
    #[error("chain.contract_address: {0}")]
    Contract(#[from] ValidationError),
}

/// Builds the shared outbound HTTP client.
///
/// # Errors
///
/// Returns [`AppError::Client`] when the TLS backend cannot initialise.
pub fn http_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder().user_agent(USER_AGENT).build()?)
}

/// Wires the production adapters into a router.
///
/// Missing credentials do not fail startup; the affected route reports the
/// upstream rejection instead. A warning is logged for each.
///
/// # Errors
///
/// Returns [`AppError`] when the HTTP client cannot be built or the contract
/// address is malformed.
pub fn build_router(config: &AddyConfig) -> Result<ApiRouter<DefaultClock>, AppError> {
    warn_unconfigured(config);
    let client = http_client()?;
    let contract = Address::parse(&config.chain.contract_address)?;

    let tasks: Arc<dyn TaskSource> =
        Arc::new(NotionTaskSource::new(client.clone(), config.notion.clone()));
    let model: Arc<dyn CompletionModel> =
        Arc::new(OpenAiCompletionModel::new(client.clone(), config.openai.clone()));
    let commits: Arc<dyn CommitFeed> =
        Arc::new(GitHubCommitFeed::new(client.clone(), config.github.clone()));
    let reader: Arc<dyn Erc721Reader> = Arc::new(JsonRpcErc721Reader::new(
        client.clone(),
        config.chain.rpc_url.clone(),
        contract.clone(),
    ));
    let metadata: Arc<dyn MetadataFetcher> = Arc::new(HttpMetadataFetcher::new(
        client,
        config.chain.ipfs_gateway.clone(),
    ));

    let recommendations = SessionRecommendationService::new(
        Arc::clone(&tasks),
        model,
        Arc::new(DefaultClock),
        config.openai.model.clone(),
        ResponseCache::with_ttl_secs(config.cache.ttl_secs),
    );
    let holdings =
        NftHoldingsService::new(reader, metadata, contract, config.chain.explorer_base.clone());

    Ok(ApiRouter::new(ApiServices {
        tasks,
        recommendations: Arc::new(recommendations),
        commits,
        holdings: Arc::new(holdings),
    }))
}

/// Logs a warning for every upstream lacking credentials.
pub fn warn_unconfigured(config: &AddyConfig) {
    for warning in unconfigured_warnings(config) {
        warn!("{warning}");
    }
}

/// Lists the upstreams whose credentials are missing.
#[must_use]
pub fn unconfigured_warnings(config: &AddyConfig) -> Vec<String> {
    let checks = [
        (
            config.notion.is_configured(),
            "Notion is not configured; set NOTION_KEY and NOTION_DATABASE_ID (or ADDY_NOTION__API_KEY and ADDY_NOTION__DATABASE_ID). /notion-data and /recommend-session will fail.",
        ),
        (
            config.openai.is_configured(),
            "OpenAI is not configured; set OPENAI_API_KEY (or ADDY_OPENAI__API_KEY). /recommend-session will fail.",
        ),
        (
            config.github.is_configured(),
            "GitHub is not configured; set GITHUB_USERNAME (or ADDY_GITHUB__USERNAME). /github-commits and /github-latest will fail.",
        ),
    ];
    checks
        .into_iter()
        .filter(|(configured, _)| !configured)
        .map(|(_, message)| message.to_owned())
        .collect()
}
