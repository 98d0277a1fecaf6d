//! Single-slot response cache with a fixed time-to-live.
//!
//! The cache holds at most one entry. Time is always supplied by the caller,
//! so expiry can be exercised without waiting on the wall clock.

use chrono::{DateTime, TimeDelta, Utc};

/// Default lifetime of a cached payload.
pub const DEFAULT_TTL_SECS: i64 = 300;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    key: String,
    value: V,
    expires_at: DateTime<Utc>,
}

/// Owned TTL cache with one slot.
///
/// A lookup hits only when the key matches the stored entry and `now` is
/// strictly before its expiry. Writes overwrite the slot unconditionally.
#[derive(Debug, Clone)]
pub struct ResponseCache<V> {
    ttl: TimeDelta,
    entry: Option<CacheEntry<V>>,
}

impl<V> ResponseCache<V> {
    /// Creates an empty cache whose entries live for `ttl`.
    #[must_use]
    pub const fn new(ttl: TimeDelta) -> Self {
        Self { ttl, entry: None }
    }

    /// Creates an empty cache whose entries live for `ttl_secs` seconds.
    ///
    /// Values too large for a time delta are capped at the maximum delta.
    #[must_use]
    pub fn with_ttl_secs(ttl_secs: u64) -> Self {
        let ttl = i64::try_from(ttl_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);
        Self::new(ttl)
    }

    /// Returns the configured time-to-live.
    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Returns the cached value for `key` if it has not expired at `now`.
    #[must_use]
    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<&V> {
        self.entry
            .as_ref()
            .filter(|entry| entry.key == key && now < entry.expires_at)
            .map(|entry| &entry.value)
    }

    /// Stores `value` under `key`, expiring `ttl` after `now`.
    ///
    /// Any previous entry is replaced, whatever its key.
    pub fn set(&mut self, key: impl Into<String>, value: V, now: DateTime<Utc>) {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.entry = Some(CacheEntry {
            key: key.into(),
            value,
            expires_at,
        });
    }

    /// Returns the expiry of the stored entry, expired or not.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.entry.as_ref().map(|entry| entry.expires_at)
    }
}

impl<V> Default for ResponseCache<V> {
    fn default() -> Self {
        Self::with_ttl_secs(DEFAULT_TTL_SECS.unsigned_abs())
    }
}
