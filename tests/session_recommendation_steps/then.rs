//! Then steps for session recommendation scenarios.

use super::world::RecommendationWorld;
use rstest_bdd_macros::then;
use serde_json::Value;

#[then("both responses are identical")]
fn both_identical(world: &mut RecommendationWorld) -> Result<(), eyre::Report> {
    let [first, second] = world.responses.as_slice() else {
        return Err(eyre::eyre!(
            "expected two responses, found {}",
            world.responses.len()
        ));
    };
    if first.status() != 200 || first != second {
        return Err(eyre::eyre!(
            "responses differ: {} vs {}",
            first.body_text(),
            second.body_text()
        ));
    }
    Ok(())
}

#[then("the model was called {count:usize} times")]
fn model_called(world: &mut RecommendationWorld, count: usize) -> Result<(), eyre::Report> {
    let calls = world.model.call_count();
    if calls != count {
        return Err(eyre::eyre!("expected {count} model calls, found {calls}"));
    }
    Ok(())
}

#[then("the overall completion is {expected:f64}")]
fn overall_completion(world: &mut RecommendationWorld, expected: f64) -> Result<(), eyre::Report> {
    let completion = world
        .last_response()?
        .body()
        .and_then(|body| body.pointer("/overallProgress/completion"))
        .and_then(Value::as_f64)
        .ok_or_else(|| eyre::eyre!("response has no overall completion"))?;
    if (completion - expected).abs() > f64::EPSILON {
        return Err(eyre::eyre!(
            "expected completion {expected}, found {completion}"
        ));
    }
    Ok(())
}

#[then("the first recommendation lasts {minutes:i64} minutes")]
fn first_recommendation_lasts(
    world: &mut RecommendationWorld,
    minutes: i64,
) -> Result<(), eyre::Report> {
    let duration = world
        .last_response()?
        .body()
        .and_then(|body| body.pointer("/recommendations/0/sessionDuration"))
        .and_then(Value::as_i64)
        .ok_or_else(|| eyre::eyre!("response has no first recommendation"))?;
    if duration != minutes {
        return Err(eyre::eyre!("expected {minutes} minutes, found {duration}"));
    }
    Ok(())
}

#[then("the response status is {status:u16}")]
fn response_status(world: &mut RecommendationWorld, status: u16) -> Result<(), eyre::Report> {
    let response = world.last_response()?;
    if response.status() != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}: {}",
            response.status(),
            response.body_text()
        ));
    }
    Ok(())
}

#[then(r#"the error message mentions "{fragment}""#)]
fn error_mentions(world: &mut RecommendationWorld, fragment: String) -> Result<(), eyre::Report> {
    let message = world
        .last_response()?
        .body()
        .and_then(|body| body.get("error"))
        .and_then(Value::as_str)
        .ok_or_else(|| eyre::eyre!("response has no error message"))?;
    if !message.contains(&fragment) {
        return Err(eyre::eyre!("error {message:?} does not mention {fragment:?}"));
    }
    Ok(())
}
