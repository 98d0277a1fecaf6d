//! Normalised task record.

use serde::{Deserialize, Serialize};

/// Progress stage derived from a task's completion ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStage {
    /// Completion is exactly zero.
    NotStarted,
    /// Completion is strictly between zero and one.
    InProgress,
    /// Completion is exactly one.
    Completed,
}

/// A unit of work tracked in the task database.
///
/// Field names on the wire match the shape the mobile client already reads:
/// the task title is serialised as `task` and the remaining fields use
/// camel case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "task")]
    name: String,
    status: String,
    deadline: Option<String>,
    hours_estimate: f64,
    category: String,
    completion: f64,
}

impl Task {
    /// Creates a task with the given title and default metadata.
    ///
    /// Defaults mirror what the provider adapter substitutes for absent
    /// properties: empty strings, no deadline and zero for numbers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: String::new(),
            deadline: None,
            hours_estimate: 0.0,
            category: String::new(),
            completion: 0.0,
        }
    }

    /// Sets the workflow status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the deadline as reported by the provider (ISO-8601, verbatim).
    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    /// Sets the estimated hours of work.
    ///
    /// Non-finite or negative estimates are stored as zero.
    #[must_use]
    pub fn with_hours_estimate(mut self, hours: f64) -> Self {
        self.hours_estimate = if hours.is_finite() { hours.max(0.0) } else { 0.0 };
        self
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the completion ratio, clamped into `[0, 1]`.
    ///
    /// Non-finite values are stored as zero so that every task falls into
    /// exactly one [`TaskStage`].
    #[must_use]
    pub fn with_completion(mut self, completion: f64) -> Self {
        self.completion = if completion.is_finite() {
            completion.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    /// Returns the task title.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the workflow status label.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<&str> {
        self.deadline.as_deref()
    }

    /// Returns the estimated hours of work.
    #[must_use]
    pub const fn hours_estimate(&self) -> f64 {
        self.hours_estimate
    }

    /// Returns the category label.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the completion ratio in `[0, 1]`.
    #[must_use]
    pub const fn completion(&self) -> f64 {
        self.completion
    }

    /// Returns `true` when the task carries a deadline.
    #[must_use]
    pub const fn has_deadline(&self) -> bool {
        self.deadline.is_some()
    }

    /// Classifies the task by completion ratio.
    #[must_use]
    pub fn stage(&self) -> TaskStage {
        if self.completion >= 1.0 {
            TaskStage::Completed
        } else if self.completion <= 0.0 {
            TaskStage::NotStarted
        } else {
            TaskStage::InProgress
        }
    }
}
