//! Fixed-duration focus sessions.

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

/// Errors constructing a focus session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FocusError {
    /// Sessions must last at least one minute.
    #[error("focus session must last at least one minute")]
    ZeroDuration,
}

/// A countdown started at a fixed instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusSession {
    task_name: String,
    duration: TimeDelta,
    started_at: DateTime<Utc>,
}

impl FocusSession {
    /// Starts a session of `minutes` on `task_name` at `started_at`.
    ///
    /// # Errors
    ///
    /// Returns [`FocusError::ZeroDuration`] when `minutes` is zero.
    pub fn new(
        task_name: impl Into<String>,
        minutes: u32,
        started_at: DateTime<Utc>,
    ) -> Result<Self, FocusError> {
        if minutes == 0 {
            return Err(FocusError::ZeroDuration);
        }
        Ok(Self {
            task_name: task_name.into(),
            duration: TimeDelta::minutes(i64::from(minutes)),
            started_at,
        })
    }

    /// Returns the task the session is for.
    #[must_use]
    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    /// Returns the full session length.
    #[must_use]
    pub const fn duration(&self) -> TimeDelta {
        self.duration
    }

    /// Returns when the session started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns when the session ends.
    #[must_use]
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.started_at + self.duration
    }

    /// Returns the time left at `now`, clamped to `[0, duration]`.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> TimeDelta {
        (self.ends_at() - now).clamp(TimeDelta::zero(), self.duration)
    }

    /// Returns `true` once no time is left.
    #[must_use]
    pub fn is_finished(&self, now: DateTime<Utc>) -> bool {
        self.remaining(now).is_zero()
    }
}

/// Renders `remaining` as `MM:SS`, rounding partial seconds down.
///
/// Minutes are not wrapped into hours, so three hours reads `180:00`.
/// Negative input renders as `00:00`.
#[must_use]
pub fn clock_face(remaining: TimeDelta) -> String {
    let seconds = remaining.num_seconds().max(0);
    format!(
        "{:02}:{:02}",
        seconds.div_euclid(60),
        seconds.rem_euclid(60)
    )
}
