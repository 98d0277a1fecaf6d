//! Behaviour tests for the cached `/recommend-session` endpoint.

mod session_recommendation_steps;

use rstest_bdd_macros::scenario;
use session_recommendation_steps::world::{RecommendationWorld, world};

#[scenario(
    path = "tests/features/session_recommendation.feature",
    name = "Recommendations are served from cache within five minutes"
)]
#[tokio::test(flavor = "multi_thread")]
async fn served_from_cache(world: RecommendationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/session_recommendation.feature",
    name = "Cached recommendations expire after five minutes"
)]
#[tokio::test(flavor = "multi_thread")]
async fn cache_expires(world: RecommendationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/session_recommendation.feature",
    name = "Task database failure is reported"
)]
#[tokio::test(flavor = "multi_thread")]
async fn task_database_failure(world: RecommendationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/session_recommendation.feature",
    name = "Prose replies from the model are rejected"
)]
#[tokio::test(flavor = "multi_thread")]
async fn prose_reply_rejected(world: RecommendationWorld) {
    let _ = world;
}
