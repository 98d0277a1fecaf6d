//! In-memory task source for tests and offline runs.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::Task,
    ports::{TaskSource, TaskSourceError, TaskSourceResult},
};

/// Thread-safe in-memory task source.
///
/// Serves a fixed task list, or a configured failure, and counts how often
/// it was queried.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskSource {
    state: Arc<RwLock<InMemoryTaskState>>,
    fetches: Arc<AtomicUsize>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    failure: Option<TaskSourceError>,
}

impl InMemoryTaskSource {
    /// Creates an empty task source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a task source serving `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let source = Self::new();
        if let Ok(mut state) = source.state.write() {
            state.tasks = tasks;
        }
        source
    }

    /// Replaces the served task list and clears any configured failure.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn replace_tasks(&self, tasks: Vec<Task>) -> TaskSourceResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskSourceError::transport(std::io::Error::other(err.to_string())))?;
        state.tasks = tasks;
        state.failure = None;
        Ok(())
    }

    /// Makes every subsequent fetch fail with `error`.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn fail_with(&self, error: TaskSourceError) -> TaskSourceResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskSourceError::transport(std::io::Error::other(err.to_string())))?;
        state.failure = Some(error);
        Ok(())
    }

    /// Returns how many times [`TaskSource::fetch_tasks`] was called.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskSource for InMemoryTaskSource {
    async fn fetch_tasks(&self) -> TaskSourceResult<Vec<Task>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let state = self
            .state
            .read()
            .map_err(|err| TaskSourceError::transport(std::io::Error::other(err.to_string())))?;
        if let Some(error) = &state.failure {
            return Err(error.clone());
        }
        Ok(state.tasks.clone())
    }
}
