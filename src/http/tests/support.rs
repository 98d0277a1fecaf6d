//! Router wiring over in-memory adapters.

use std::sync::Arc;

use crate::clock::ManualClock;
use crate::commit_feed::adapters::InMemoryCommitFeed;
use crate::http::router::{ApiRouter, ApiServices};
use crate::nft::{
    adapters::{InMemoryErc721Reader, InMemoryMetadataFetcher},
    domain::Address,
    ports::{Erc721Reader, MetadataFetcher},
    services::NftHoldingsService,
};
use crate::recommendation::{
    adapters::ScriptedCompletionModel, cache::ResponseCache, ports::CompletionModel,
    services::SessionRecommendationService,
};
use crate::task::{adapters::InMemoryTaskSource, domain::Task, ports::TaskSource};
use chrono::{TimeZone, Utc};
use serde_json::json;

pub const CONTRACT: &str = "0x6847f4ef767fc976f9158a1d0de7cb60e1af4ebf";
pub const EXPLORER: &str = "https://sepolia.mantlescan.xyz/address";

pub struct Harness {
    pub tasks: InMemoryTaskSource,
    pub model: ScriptedCompletionModel,
    pub clock: Arc<ManualClock>,
    pub commits: InMemoryCommitFeed,
    pub chain: InMemoryErc721Reader,
    pub router: ApiRouter<ManualClock>,
}

pub fn model_reply() -> String {
    json!({
        "recommendations": [{
            "taskName": "Thesis draft",
            "sessionDuration": 60,
            "priority": 1,
            "reason": "Due soon",
            "currentCompletion": 0.5,
            "targetCompletion": 0.7,
            "deadline": "2025-03-04"
        }]
    })
    .to_string()
}

pub fn harness() -> Harness {
    let model = ScriptedCompletionModel::replying(model_reply());
    let completion: Arc<dyn CompletionModel> = Arc::new(model.clone());
    let parts = wire(completion);
    Harness {
        tasks: parts.tasks,
        model,
        clock: parts.clock,
        commits: parts.commits,
        chain: parts.chain,
        router: parts.router,
    }
}

/// Router whose recommendation pipeline calls `model`.
pub fn router_with_model(model: Arc<dyn CompletionModel>) -> ApiRouter<ManualClock> {
    wire(model).router
}

struct Wiring {
    tasks: InMemoryTaskSource,
    clock: Arc<ManualClock>,
    commits: InMemoryCommitFeed,
    chain: InMemoryErc721Reader,
    router: ApiRouter<ManualClock>,
}

fn wire(completion: Arc<dyn CompletionModel>) -> Wiring {
    let tasks = InMemoryTaskSource::with_tasks(vec![
        Task::new("Ship release").with_completion(1.0),
        Task::new("Thesis draft")
            .with_completion(0.5)
            .with_deadline("2025-03-04"),
    ]);
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp"),
    ));
    let commits = InMemoryCommitFeed::new();
    let chain = InMemoryErc721Reader::new();

    let task_source: Arc<dyn TaskSource> = Arc::new(tasks.clone());
    let reader: Arc<dyn Erc721Reader> = Arc::new(chain.clone());
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
        EXPLORER,
    );
    let router = ApiRouter::new(ApiServices {
        tasks: task_source,
        recommendations: Arc::new(recommendations),
        commits: Arc::new(commits.clone()),
        holdings: Arc::new(holdings),
    });

    Wiring {
        tasks,
        clock,
        commits,
        chain,
        router,
    }
}
