//! Shared world state for session recommendation BDD scenarios.

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
use addy::task::{adapters::InMemoryTaskSource, domain::Task, ports::TaskSource};
use chrono::{TimeZone, Utc};
use rstest::fixture;

const CONTRACT: &str = "0x6847f4ef767fc976f9158a1d0de7cb60e1af4ebf";

/// Scenario world for the `/recommend-session` endpoint.
pub struct RecommendationWorld {
    /// Task database seen by the router.
    pub tasks: InMemoryTaskSource,
    /// Tasks seeded so far, in scenario order.
    pub seeded: Vec<Task>,
    /// Completion model answering every prompt.
    pub model: ScriptedCompletionModel,
    /// Clock driving cache expiry.
    pub clock: Arc<ManualClock>,
    /// Router under test.
    pub router: ApiRouter<ManualClock>,
    /// Responses received, oldest first.
    pub responses: Vec<ApiResponse>,
}

impl RecommendationWorld {
    /// Creates a world with an empty task database and an empty reply.
    ///
    /// # Panics
    ///
    /// Panics if the fixed start instant or contract address is invalid.
    #[must_use]
    pub fn new() -> Self {
        let tasks = InMemoryTaskSource::new();
        let model = ScriptedCompletionModel::replying("{\"recommendations\": []}");
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
                .single()
                .expect("valid timestamp"),
        ));

        let task_source: Arc<dyn TaskSource> = Arc::new(tasks.clone());
        let completion: Arc<dyn CompletionModel> = Arc::new(model.clone());
        let reader: Arc<dyn Erc721Reader> = Arc::new(InMemoryErc721Reader::new());
        let metadata: Arc<dyn MetadataFetcher> = Arc::new(InMemoryMetadataFetcher::new());

        let recommendations = SessionRecommendationService::new(
            Arc::clone(&task_source),
            completion,
            Arc::clone(&clock),
            "gpt-test",
            ResponseCache::default(),
        );
        let holdings = NftHoldingsService::new(
            reader,
            metadata,
            Address::parse(CONTRACT).expect("valid contract"),
            "https://explorer.test/address",
        );
        let router = ApiRouter::new(ApiServices {
            tasks: task_source,
            recommendations: Arc::new(recommendations),
            commits: Arc::new(InMemoryCommitFeed::new()),
            holdings: Arc::new(holdings),
        });

        Self {
            tasks,
            seeded: Vec::new(),
            model,
            clock,
            router,
            responses: Vec::new(),
        }
    }

    /// Sends `GET /recommend-session` and records the response.
    pub fn request_recommendations(&mut self) {
        let response = run_async(self.router.handle(&ApiRequest::get("/recommend-session")));
        self.responses.push(response);
    }

    /// Returns the most recent response.
    ///
    /// # Errors
    ///
    /// Returns an error when no request has been sent yet.
    pub fn last_response(&self) -> Result<&ApiResponse, eyre::Report> {
        self.responses
            .last()
            .ok_or_else(|| eyre::eyre!("no request has been sent in this scenario"))
    }
}

impl Default for RecommendationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture providing a fresh recommendation world.
#[fixture]
pub fn world() -> RecommendationWorld {
    RecommendationWorld::new()
}

/// Runs an async operation from a synchronous step.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
