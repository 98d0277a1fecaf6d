//! Recommended work sessions and the payload returned to the client.

use crate::task::domain::OverallProgress;
use serde::{Deserialize, Serialize};

/// A model-suggested focused work session.
///
/// `session_duration` and `priority` are integers after normalisation; the
/// remaining fields are passed through from the model unchecked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    task_name: String,
    session_duration: i64,
    priority: i64,
    reason: String,
    current_completion: f64,
    target_completion: f64,
    deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_remaining: Option<String>,
}

impl Recommendation {
    /// Creates a recommendation with the required fields.
    #[must_use]
    pub fn new(
        task_name: impl Into<String>,
        session_duration: i64,
        priority: i64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            session_duration,
            priority,
            reason: reason.into(),
            current_completion: 0.0,
            target_completion: 0.0,
            deadline: None,
            time_remaining: None,
        }
    }

    /// Sets the current and target completion figures.
    #[must_use]
    pub const fn with_completion(mut self, current: f64, target: f64) -> Self {
        self.current_completion = current;
        self.target_completion = target;
        self
    }

    /// Sets the deadline as reported by the model.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Option<String>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets the human-readable time remaining.
    #[must_use]
    pub fn with_time_remaining(mut self, time_remaining: Option<String>) -> Self {
        self.time_remaining = time_remaining;
        self
    }

    /// Returns the recommended task title.
    #[must_use]
    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    /// Returns the session length in minutes.
    #[must_use]
    pub const fn session_duration(&self) -> i64 {
        self.session_duration
    }

    /// Returns the priority (1 is highest).
    #[must_use]
    pub const fn priority(&self) -> i64 {
        self.priority
    }

    /// Returns the model's justification.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the task completion before the session.
    #[must_use]
    pub const fn current_completion(&self) -> f64 {
        self.current_completion
    }

    /// Returns the completion to aim for by the end of the session.
    #[must_use]
    pub const fn target_completion(&self) -> f64 {
        self.target_completion
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<&str> {
        self.deadline.as_deref()
    }

    /// Returns the human-readable time remaining, if the model gave one.
    #[must_use]
    pub fn time_remaining(&self) -> Option<&str> {
        self.time_remaining.as_deref()
    }
}

/// Body of the `/recommend-session` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPayload {
    overall_progress: OverallProgress,
    recommendations: Vec<Recommendation>,
}

impl RecommendationPayload {
    /// Combines progress statistics with the model's recommendations.
    #[must_use]
    pub const fn new(
        overall_progress: OverallProgress,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            overall_progress,
            recommendations,
        }
    }

    /// Returns the aggregate progress statistics.
    #[must_use]
    pub const fn overall_progress(&self) -> &OverallProgress {
        &self.overall_progress
    }

    /// Returns the recommendations in model order.
    #[must_use]
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }
}
