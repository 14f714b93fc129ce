//! Expiring key-value store.
//!
//! ## Eviction
//!
//! Two independent mechanisms remove entries:
//!
//! - **Expiry**: an entry is logically absent once `now > expires_at`. It is
//!   physically removed lazily, on the next read of its key or by
//!   [`TtlCache::cleanup`].
//! - **Capacity**: when inserting a new key into a full cache, the entry
//!   inserted earliest is evicted. Re-setting an existing key updates it in
//!   place and keeps its original insertion position. Reads never affect
//!   eviction order.
//!
//! ## Concurrency
//!
//! Entries live in a sharded [`DashMap`], so reads and invalidations of
//! unrelated keys do not contend. Inserts additionally take a short mutex on
//! the insertion-order queue.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::Mutex;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::CacheError;

/// Default capacity.
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Default entry lifetime.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// A cached value with its lifetime.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// Cached value
    pub data: T,
    /// Absolute expiry instant
    pub expires_at: DateTime<Utc>,
    /// When the value was stored
    pub created_at: DateTime<Utc>,
    /// Insertion sequence number, stable across in-place updates
    seq: u64,
}

impl<T> CacheEntry<T> {
    /// Whether the entry is logically absent at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Cache statistics for monitoring and tuning.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Total hits
    pub hits: u64,
    /// Total misses, including reads of expired entries
    pub misses: u64,
    /// Entries physically present (may include expired, not yet evicted)
    pub size: usize,
}

impl CacheStats {
    /// Hit rate in the 0.0-1.0 range.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Hit rate formatted as a percentage with one decimal, e.g. `"66.7%"`.
    pub fn hit_rate_label(&self) -> String {
        format!("{:.1}%", self.hit_rate() * 100.0)
    }
}

enum Lookup<T> {
    Hit(T),
    Expired,
    Missing,
}

/// Thread-safe expiring cache.
#[derive(Debug)]
pub struct TtlCache<T> {
    entries: DashMap<String, CacheEntry<T>>,
    /// Insertion order as (key, seq); stale pairs are skipped on eviction
    order: Mutex<VecDeque<(String, u64)>>,
    next_seq: AtomicU64,
    max_entries: usize,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES, DEFAULT_TTL)
    }
}

impl<T: Clone> TtlCache<T> {
    /// Create a cache with the given capacity and default TTL.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            order: Mutex::new(VecDeque::new()),
            next_seq: AtomicU64::new(0),
            max_entries: max_entries.max(1),
            default_ttl,
            clock: Arc::new(SystemClock),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Default TTL applied by [`TtlCache::set`].
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Capacity.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Get a live value.
    ///
    /// Expired entries count as misses and are removed.
    pub fn get(&self, key: &str) -> Option<T> {
        let now = self.clock.now();

        let lookup = match self.entries.get(key) {
            Some(entry) if entry.is_expired(now) => Lookup::Expired,
            Some(entry) => Lookup::Hit(entry.data.clone()),
            None => Lookup::Missing,
        };

        match lookup {
            Lookup::Hit(data) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(key, "Cache hit");
                Some(data)
            }
            Lookup::Expired => {
                self.entries.remove_if(key, |_, entry| entry.is_expired(now));
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(key, "Cache miss (expired)");
                None
            }
            Lookup::Missing => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(key, "Cache miss");
                None
            }
        }
    }

    /// Store a value with the default TTL.
    pub fn set(&self, key: impl Into<String>, data: T) {
        self.set_with_ttl(key, data, self.default_ttl);
    }

    /// Store a value with an explicit TTL.
    pub fn set_with_ttl(&self, key: impl Into<String>, data: T, ttl: Duration) {
        let key = key.into();
        let now = self.clock.now();
        let expires_at = expiry(now, ttl);

        let mut order = self.order.lock();

        if let Some(mut existing) = self.entries.get_mut(&key) {
            existing.data = data;
            existing.expires_at = expires_at;
            existing.created_at = now;
            return;
        }

        while self.entries.len() >= self.max_entries {
            if !self.evict_oldest(&mut order) {
                break;
            }
        }

        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        order.push_back((key.clone(), seq));
        self.entries.insert(
            key,
            CacheEntry {
                data,
                expires_at,
                created_at: now,
                seq,
            },
        );

        // Invalidations leave stale pairs behind; keep the queue bounded.
        if order.len() > self.max_entries * 2 {
            order.retain(|(k, s)| self.entries.get(k).is_some_and(|e| e.seq == *s));
        }
    }

    /// Return the cached value, or run `fetcher`, store its result, and
    /// return it.
    ///
    /// Fetch errors are propagated and nothing is cached.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        key: &str,
        fetcher: F,
        ttl: Duration,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(cached) = self.get(key) {
            return Ok(cached);
        }

        let data = fetcher().await?;
        self.set_with_ttl(key, data.clone(), ttl);
        Ok(data)
    }

    /// Remove one key. Returns whether it was present.
    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Remove every key matching a regular expression.
    ///
    /// Returns the number of entries removed.
    pub fn invalidate_pattern(&self, pattern: &str) -> Result<usize, CacheError> {
        let regex = Regex::new(pattern)?;

        let matching: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| regex.is_match(entry.key()))
            .map(|entry| entry.key().clone())
            .collect();

        let removed = matching
            .iter()
            .filter(|key| self.entries.remove(key.as_str()).is_some())
            .count();

        debug!(pattern, removed, "Invalidated cache entries by pattern");
        Ok(removed)
    }

    /// Remove everything. Statistics are kept.
    pub fn clear(&self) {
        let mut order = self.order.lock();
        self.entries.clear();
        order.clear();
    }

    /// Physically remove expired entries.
    ///
    /// Returns the number removed.
    pub fn cleanup(&self) -> usize {
        let now = self.clock.now();

        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.value().is_expired(now))
            .map(|entry| entry.key().clone())
            .collect();

        let removed = expired
            .iter()
            .filter(|key| {
                self.entries
                    .remove_if(key.as_str(), |_, entry| entry.is_expired(now))
                    .is_some()
            })
            .count();

        if removed > 0 {
            debug!(removed, "Cleaned up expired cache entries");
        }
        removed
    }

    /// Entries physically present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of hit/miss counters and size.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size: self.entries.len(),
        }
    }

    /// Pop the queue until a live pair is found and evict it.
    fn evict_oldest(&self, order: &mut VecDeque<(String, u64)>) -> bool {
        while let Some((key, seq)) = order.pop_front() {
            if self
                .entries
                .remove_if(&key, |_, entry| entry.seq == seq)
                .is_some()
            {
                debug!(key = %key, "Evicted oldest cache entry");
                return true;
            }
        }
        false
    }
}

fn expiry(now: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(ttl)
        .ok()
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
