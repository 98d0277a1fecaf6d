//! Repeating background tasks tied to their owner's lifetime.

use std::future::Future;
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{self, MissedTickBehavior};

/// Whether a scheduled task should keep running after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    /// Run again after the next period.
    Continue,
    /// Stop the task.
    Stop,
}

/// A tokio task that runs a tick function at a fixed period.
///
/// The first tick runs immediately. The task ends when a tick returns
/// [`TickControl::Stop`], when [`ScheduledTask::cancel`] is called or when
/// the handle is dropped.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: Option<JoinHandle<()>>,
}

impl ScheduledTask {
    /// Spawns `tick` on the current runtime, repeating every `period`.
    ///
    /// Ticks missed while a slow tick runs are delayed rather than burst.
    #[must_use]
    pub fn every<F, Fut>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = TickControl> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tick().await == TickControl::Stop {
                    break;
                }
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Returns `true` once the task has stopped for any reason.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Aborts the task. Calling it again has no effect.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Waits until a tick stops the task.
    ///
    /// # Errors
    ///
    /// Returns the [`JoinError`] when a tick panicked or the task was
    /// aborted by the runtime.
    pub async fn wait(mut self) -> Result<(), JoinError> {
        match self.handle.take() {
            Some(handle) => handle.await,
            None => Ok(()),
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
