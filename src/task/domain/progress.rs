//! Aggregate progress statistics over a task list.

use super::{Task, TaskStage};
use serde::{Deserialize, Serialize};

/// Summary counts and mean completion for a task list.
///
/// Derived on every request, never stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallProgress {
    completion: f64,
    total_tasks: usize,
    completed_tasks: usize,
    in_progress_tasks: usize,
    not_started_tasks: usize,
    tasks_with_deadlines: usize,
}

impl OverallProgress {
    /// Computes progress statistics for `tasks`.
    ///
    /// `completion` is the arithmetic mean of per-task completion, or zero
    /// for an empty list.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut progress = Self {
            completion: mean_completion(tasks),
            total_tasks: tasks.len(),
            ..Self::default()
        };

        for task in tasks {
            match task.stage() {
                TaskStage::Completed => progress.completed_tasks += 1,
                TaskStage::InProgress => progress.in_progress_tasks += 1,
                TaskStage::NotStarted => progress.not_started_tasks += 1,
            }
            if task.has_deadline() {
                progress.tasks_with_deadlines += 1;
            }
        }

        progress
    }

    /// Returns the mean completion ratio.
    #[must_use]
    pub const fn completion(&self) -> f64 {
        self.completion
    }

    /// Returns the number of tasks considered.
    #[must_use]
    pub const fn total_tasks(&self) -> usize {
        self.total_tasks
    }

    /// Returns the number of fully completed tasks.
    #[must_use]
    pub const fn completed_tasks(&self) -> usize {
        self.completed_tasks
    }

    /// Returns the number of partially completed tasks.
    #[must_use]
    pub const fn in_progress_tasks(&self) -> usize {
        self.in_progress_tasks
    }

    /// Returns the number of tasks with zero completion.
    #[must_use]
    pub const fn not_started_tasks(&self) -> usize {
        self.not_started_tasks
    }

    /// Returns the number of tasks carrying a deadline.
    #[must_use]
    pub const fn tasks_with_deadlines(&self) -> usize {
        self.tasks_with_deadlines
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "mean completion is a ratio over at most a few hundred tasks"
)]
fn mean_completion(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let sum: f64 = tasks.iter().map(Task::completion).sum();
    sum / tasks.len() as f64
}
