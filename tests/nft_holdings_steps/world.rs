//! Shared world state for NFT holdings BDD scenarios.

use std::sync::Arc;

use addy::clock::ManualClock;
use addy::commit_feed::adapters::InMemoryCommitFeed;
use addy::http::{
    request::{ApiRequest, ApiResponse},
    router::{ApiRouter, ApiServices},
};
use addy::nft::{
    adapters::{InMemoryErc721Reader, InMemoryMetadataFetcher},
    domain::Address,
    ports::{Erc721Reader, MetadataFetcher},
    services::NftHoldingsService,
};
use addy::recommendation::{
    adapters::ScriptedCompletionModel, cache::ResponseCache, ports::CompletionModel,
    services::SessionRecommendationService,
};
use addy::task::{adapters::InMemoryTaskSource, ports::TaskSource};
use chrono::{TimeZone, Utc};
use rstest::fixture;
use serde_json::Value;

/// Contract every scenario queries.
pub const CONTRACT: &str = "0x6847f4ef767fc976f9158a1d0de7cb60e1af4ebf";
/// Explorer base configured on the router.
pub const EXPLORER: &str = "https://sepolia.mantlescan.xyz/address";

/// Scenario world for the `/nft-holdings` endpoint.
pub struct HoldingsWorld {
    /// Simulated ERC-721 contract.
    pub chain: InMemoryErc721Reader,
    /// Simulated metadata host.
    pub metadata: InMemoryMetadataFetcher,
    /// Router under test.
    pub router: ApiRouter<ManualClock>,
    /// Most recent response.
    pub response: Option<ApiResponse>,
}

impl HoldingsWorld {
    /// Creates a world whose contract has minted nothing.
    ///
    /// # Panics
    ///
    /// Panics if the fixed start instant or contract address is invalid.
    #[must_use]
    pub fn new() -> Self {
        let chain = InMemoryErc721Reader::new();
        let metadata = InMemoryMetadataFetcher::new();
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
                .single()
                .expect("valid timestamp"),
        ));

        let task_source: Arc<dyn TaskSource> = Arc::new(InMemoryTaskSource::new());
        let completion: Arc<dyn CompletionModel> =
            Arc::new(ScriptedCompletionModel::replying("{\"recommendations\": []}"));
        let reader: Arc<dyn Erc721Reader> = Arc::new(chain.clone());
        let fetcher: Arc<dyn MetadataFetcher> = Arc::new(metadata.clone());

        let recommendations = SessionRecommendationService::new(
            Arc::clone(&task_source),
            completion,
            clock,
            "gpt-test",
            ResponseCache::default(),
        );
        let holdings = NftHoldingsService::new(
            reader,
            fetcher,
            Address::parse(CONTRACT).expect("valid contract"),
            EXPLORER,
        );
        let router = ApiRouter::new(ApiServices {
            tasks: task_source,
            recommendations: Arc::new(recommendations),
            commits: Arc::new(InMemoryCommitFeed::new()),
            holdings: Arc::new(holdings),
        });

        Self {
            chain,
            metadata,
            router,
            response: None,
        }
    }

    /// Sends `GET` for `target` and records the response.
    pub fn request(&mut self, target: &str) {
        self.response = Some(run_async(self.router.handle(&ApiRequest::get(target))));
    }

    /// Returns the most recent response.
    ///
    /// # Errors
    ///
    /// Returns an error when no request has been sent yet.
    pub fn last_response(&self) -> Result<&ApiResponse, eyre::Report> {
        self.response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no request has been sent in this scenario"))
    }

    /// Returns the field at `pointer` in the most recent response body.
    ///
    /// # Errors
    ///
    /// Returns an error when there is no response or the field is absent.
    pub fn field(&self, pointer: &str) -> Result<&Value, eyre::Report> {
        self.last_response()?
            .body()
            .and_then(|body| body.pointer(pointer))
            .ok_or_else(|| eyre::eyre!("response has no field at {pointer}"))
    }

    /// Returns the holding whose `tokenId` renders as `token_id`.
    ///
    /// # Errors
    ///
    /// Returns an error when no such token is listed.
    pub fn token(&self, token_id: u64) -> Result<&Value, eyre::Report> {
        let wanted = token_id.to_string();
        self.field("/tokens")?
            .as_array()
            .and_then(|tokens| {
                tokens
                    .iter()
                    .find(|token| token.get("tokenId").and_then(Value::as_str) == Some(&wanted))
            })
            .ok_or_else(|| eyre::eyre!("token {token_id} is not listed"))
    }
}

impl Default for HoldingsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture providing a fresh holdings world.
#[fixture]
pub fn world() -> HoldingsWorld {
    HoldingsWorld::new()
}

/// Runs an async operation from a synchronous step.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
