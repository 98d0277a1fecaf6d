//! Drives a focus session: the countdown display and the commit poll.
//!
//! Both loops run as [`ScheduledTask`]s and report through a channel; the
//! runner renders each event as one line on the supplied writer. Returning
//! from [`FocusRunner::run`] drops the tasks, which stops them.

use super::scheduler::{ScheduledTask, TickControl};
use super::session::{FocusSession, clock_face};
use crate::commit_feed::{domain::CommitSummary, ports::CommitFeed};
use chrono::TimeDelta;
use mockable::Clock;
use std::future::Future;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Countdown refresh period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Commit poll period.
pub const POLL_PERIOD: Duration = Duration::from_secs(5);

/// Something that happened while a session was running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusEvent {
    /// The countdown moved on.
    Tick(TimeDelta),
    /// The newest commit was fetched.
    Commit(CommitSummary),
    /// The countdown reached zero.
    Finished,
}

/// How a session run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOutcome {
    /// The full duration elapsed.
    Completed,
    /// The shutdown signal fired first.
    Interrupted,
}

/// Runs one focus session against a clock and a commit feed.
pub struct FocusRunner<C, F>
where
    C: Clock + Send + Sync + 'static,
    F: CommitFeed + ?Sized + 'static,
{
    session: FocusSession,
    clock: Arc<C>,
    feed: Arc<F>,
}

impl<C, F> FocusRunner<C, F>
where
    C: Clock + Send + Sync + 'static,
    F: CommitFeed + ?Sized + 'static,
{
    /// Creates a runner for `session`.
    #[must_use]
    pub const fn new(session: FocusSession, clock: Arc<C>, feed: Arc<F>) -> Self {
        Self {
            session,
            clock,
            feed,
        }
    }

    /// Runs until the countdown finishes or `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when writing to `out` fails.
    pub async fn run<W, S>(&self, out: &mut W, shutdown: S) -> std::io::Result<FocusOutcome>
    where
        W: Write + Send,
        S: Future<Output = ()> + Send,
    {
        writeln!(
            out,
            "Focusing on {} for {}",
            self.session.task_name(),
            clock_face(self.session.duration())
        )?;

        let (events, mut received) = mpsc::unbounded_channel();
        let _countdown = self.spawn_countdown(events.clone());
        let _poll = self.spawn_poll(events);

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                () = &mut shutdown => {
                    writeln!(out, "Session interrupted")?;
                    return Ok(FocusOutcome::Interrupted);
                }
                event = received.recv() => match event {
                    Some(FocusEvent::Finished) => {
                        render(out, &FocusEvent::Finished)?;
                        return Ok(FocusOutcome::Completed);
                    }
                    Some(event) => render(out, &event)?,
                    None => return Ok(FocusOutcome::Completed),
                },
            }
        }
    }

    fn spawn_countdown(&self, events: mpsc::UnboundedSender<FocusEvent>) -> ScheduledTask {
        let session = self.session.clone();
        let clock = Arc::clone(&self.clock);
        ScheduledTask::every(TICK_PERIOD, move || {
            let now = clock.utc();
            let control = if session.is_finished(now) {
                events.send(FocusEvent::Finished).ok();
                TickControl::Stop
            } else if events.send(FocusEvent::Tick(session.remaining(now))).is_ok() {
                TickControl::Continue
            } else {
                TickControl::Stop
            };
            std::future::ready(control)
        })
    }

    fn spawn_poll(&self, events: mpsc::UnboundedSender<FocusEvent>) -> ScheduledTask {
        let feed = Arc::clone(&self.feed);
        ScheduledTask::every(POLL_PERIOD, move || {
            let task_feed = Arc::clone(&feed);
            let sender = events.clone();
            async move {
                match task_feed.latest_across_branches().await {
                    Ok(summary) => {
                        debug!(repo = summary.repo(), "polled latest commit");
                        if sender.send(FocusEvent::Commit(summary)).is_err() {
                            return TickControl::Stop;
                        }
                    }
                    Err(error) => warn!(%error, "commit poll failed"),
                }
                TickControl::Continue
            }
        })
    }
}

fn render<W: Write>(out: &mut W, event: &FocusEvent) -> std::io::Result<()> {
    match event {
        FocusEvent::Tick(remaining) => writeln!(out, "{}", clock_face(*remaining)),
        FocusEvent::Commit(summary) => writeln!(
            out,
            "{} [{}] +{} -{}: {}",
            summary.repo(),
            summary.branch(),
            summary.stats().additions,
            summary.stats().deletions,
            summary.message().lines().next().unwrap_or_default()
        ),
        FocusEvent::Finished => writeln!(out, "00:00 Session complete"),
    }
}
