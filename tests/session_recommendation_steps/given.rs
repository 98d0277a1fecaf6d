//! Given steps for session recommendation scenarios.

use super::world::RecommendationWorld;
use addy::task::{domain::Task, ports::TaskSourceError};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;

fn seed(world: &mut RecommendationWorld, task: Task) -> Result<(), eyre::Report> {
    world.seeded.push(task);
    world
        .tasks
        .replace_tasks(world.seeded.clone())
        .wrap_err("seed task database")
}

#[given(r#"an undated task "{name}" with completion {completion:f64}"#)]
fn a_task(
    world: &mut RecommendationWorld,
    name: String,
    completion: f64,
) -> Result<(), eyre::Report> {
    seed(world, Task::new(name).with_completion(completion))
}

#[given(r#"a task "{name}" due "{deadline}" with completion {completion:f64}"#)]
fn a_task_with_deadline(
    world: &mut RecommendationWorld,
    name: String,
    deadline: String,
    completion: f64,
) -> Result<(), eyre::Report> {
    seed(
        world,
        Task::new(name)
            .with_deadline(deadline)
            .with_completion(completion),
    )
}

#[given(r#"the model recommends a {minutes:f64} minute session on "{name}""#)]
fn model_recommends(
    world: &mut RecommendationWorld,
    minutes: f64,
    name: String,
) -> Result<(), eyre::Report> {
    let reply = json!({
        "recommendations": [{
            "taskName": name,
            "sessionDuration": minutes,
            "priority": 1,
            "reason": "Closest deadline",
            "currentCompletion": 0.5,
            "targetCompletion": 0.7
        }]
    });
    world
        .model
        .set_reply(Ok(reply.to_string()))
        .wrap_err("script model reply")
}

#[given(r#"the model replies "{text}""#)]
fn model_replies(world: &mut RecommendationWorld, text: String) -> Result<(), eyre::Report> {
    world.model.set_reply(Ok(text)).wrap_err("script model reply")
}

#[given("the task database rejects requests with status {status:u16}")]
fn task_database_rejects(world: &mut RecommendationWorld, status: u16) -> Result<(), eyre::Report> {
    world
        .tasks
        .fail_with(TaskSourceError::UpstreamStatus { status })
        .wrap_err("script task database failure")
}
