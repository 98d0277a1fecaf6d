//! When steps for session recommendation scenarios.

use super::world::RecommendationWorld;
use chrono::TimeDelta;
use rstest_bdd_macros::when;

#[when("the client requests session recommendations")]
fn request_recommendations(world: &mut RecommendationWorld) {
    world.request_recommendations();
}

#[when("the client requests session recommendations again after {seconds:i64} seconds")]
fn request_again_after(world: &mut RecommendationWorld, seconds: i64) {
    world.clock.advance(TimeDelta::seconds(seconds));
    world.request_recommendations();
}
