//! In-process query cache keyed by `(resource, scope, id)` tuples.
//!
//! Backs the client's data-access layer: query wrappers read through the
//! cache with a per-entry staleness window, and mutations invalidate the
//! affected key families so the next read refetches.
//!
//! # Semantics
//!
//! ```text
//! get(key) -> Fresh(value)   entry within its TTL and not invalidated
//!          -> Stale(value)   TTL elapsed or entry invalidated; value still
//!                            readable, refetch-eligible
//!          -> Miss           nothing stored (or stored bytes undecodable)
//! ```
//!
//! Invalidation marks entries stale rather than deleting them, so callers
//! can keep rendering the last known data while a refetch is in flight.
//!
//! Concurrent fetches for the same key resolve last-write-wins: a fetch
//! started later supersedes one started earlier, and the earlier result is
//! discarded at completion time.
//!
//! # Example
//!
//! ```
//! use query_cache::{Lookup, QueryCache, QueryKey};
//! use std::time::Duration;
//!
//! let cache = QueryCache::new(Duration::from_secs(300));
//! let key = QueryKey::scoped("comments", "video", "v1");
//!
//! cache.insert(key.clone(), &vec!["first!".to_string()]).unwrap();
//! assert!(matches!(cache.get::<Vec<String>>(&key), Lookup::Fresh(_)));
//!
//! cache.invalidate_key(&key);
//! assert!(matches!(cache.get::<Vec<String>>(&key), Lookup::Stale(_)));
//! ```

use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, error};

mod error;
mod key;
mod stats;

pub use error::CacheError;
pub use key::QueryKey;
pub use stats::{CacheStats, StatsCollector};

type Result<T> = std::result::Result<T, CacheError>;

/// Outcome of a cache read
#[derive(Debug)]
pub enum Lookup<T> {
    /// Entry is within its staleness window
    Fresh(T),
    /// Entry exists but is refetch-eligible (expired or invalidated)
    Stale(T),
    /// No entry stored under the key
    Miss,
}

impl<T> Lookup<T> {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Lookup::Fresh(_))
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, Lookup::Miss)
    }

    /// The cached value regardless of freshness
    pub fn into_value(self) -> Option<T> {
        match self {
            Lookup::Fresh(v) | Lookup::Stale(v) => Some(v),
            Lookup::Miss => None,
        }
    }
}

/// Ticket identifying one fetch attempt for a key.
///
/// Obtained from [`QueryCache::begin_fetch`]; a later `begin_fetch` for the
/// same key supersedes all earlier tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

struct CacheEntry {
    value: serde_json::Value,
    stored_at: Instant,
    ttl: Duration,
    invalidated: bool,
}

impl CacheEntry {
    fn is_fresh(&self) -> bool {
        !self.invalidated && self.stored_at.elapsed() < self.ttl
    }
}

/// Concurrent cache of query results with per-entry TTL
pub struct QueryCache {
    entries: DashMap<QueryKey, CacheEntry>,
    inflight: DashMap<QueryKey, u64>,
    default_ttl: Duration,
    ttl_jitter: bool,
    stats: StatsCollector,
}

impl QueryCache {
    /// Create a cache whose entries stay fresh for `default_ttl` after insertion
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            inflight: DashMap::new(),
            default_ttl,
            ttl_jitter: false,
            stats: StatsCollector::new(),
        }
    }

    /// Spread entry expiry by adding up to 10% to each write TTL
    pub fn with_ttl_jitter(mut self) -> Self {
        self.ttl_jitter = true;
        self
    }

    /// Store a value under `key` with the default TTL
    pub fn insert<T: Serialize>(&self, key: QueryKey, value: &T) -> Result<()> {
        self.insert_with_ttl(key, value, self.default_ttl)
    }

    /// Store a value under `key` with an explicit TTL
    pub fn insert_with_ttl<T: Serialize>(
        &self,
        key: QueryKey,
        value: &T,
        ttl: Duration,
    ) -> Result<()> {
        let ttl = self.effective_ttl(ttl);
        let value = serde_json::to_value(value)?;
        debug!(key = %key, ttl_secs = ttl.as_secs(), "cache WRITE");
        self.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
                ttl,
                invalidated: false,
            },
        );
        self.stats.record_insertion();
        Ok(())
    }

    /// Read the value stored under `key`.
    ///
    /// Entries whose stored bytes no longer decode as `T` are dropped and
    /// reported as a miss, so a shape change self-heals on the next fetch.
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Lookup<T> {
        let (value, fresh) = match self.entries.get(key) {
            Some(entry) => (entry.value.clone(), entry.is_fresh()),
            None => {
                debug!(key = %key, "cache MISS");
                self.stats.record_miss();
                return Lookup::Miss;
            }
        };

        match serde_json::from_value::<T>(value) {
            Ok(decoded) if fresh => {
                debug!(key = %key, "cache HIT");
                self.stats.record_hit();
                Lookup::Fresh(decoded)
            }
            Ok(decoded) => {
                debug!(key = %key, "cache HIT (stale)");
                self.stats.record_stale_hit();
                Lookup::Stale(decoded)
            }
            Err(e) => {
                error!(key = %key, error = %e, "dropping undecodable cache entry");
                self.entries.remove(key);
                self.stats.record_decode_error();
                self.stats.record_miss();
                Lookup::Miss
            }
        }
    }

    /// Register the start of a fetch for `key`.
    ///
    /// The returned ticket must be passed to [`complete_fetch`]; any ticket
    /// issued earlier for the same key is superseded by this call.
    ///
    /// [`complete_fetch`]: QueryCache::complete_fetch
    pub fn begin_fetch(&self, key: &QueryKey) -> FetchTicket {
        let mut generation = self.inflight.entry(key.clone()).or_insert(0);
        *generation += 1;
        FetchTicket(*generation)
    }

    /// Store a fetch result if no newer fetch for the key has started.
    ///
    /// Returns `false` when the ticket was superseded and the value was
    /// discarded (last-write-wins by key).
    pub fn complete_fetch<T: Serialize>(
        &self,
        key: &QueryKey,
        ticket: FetchTicket,
        value: &T,
    ) -> Result<bool> {
        let current = self.inflight.get(key).map(|g| *g);
        if current != Some(ticket.0) {
            debug!(key = %key, "discarding superseded fetch result");
            return Ok(false);
        }
        self.insert(key.clone(), value)?;
        self.inflight.remove_if(key, |_, g| *g == ticket.0);
        Ok(true)
    }

    /// Mark every entry matching `predicate` stale (refetch-eligible).
    ///
    /// Returns the number of entries marked.
    pub fn invalidate<F>(&self, predicate: F) -> usize
    where
        F: Fn(&QueryKey) -> bool,
    {
        let mut marked = 0;
        for mut entry in self.entries.iter_mut() {
            if !entry.value().invalidated && predicate(entry.key()) {
                entry.value_mut().invalidated = true;
                debug!(key = %entry.key(), "cache INVALIDATE");
                marked += 1;
            }
        }
        self.stats.record_invalidations(marked as u64);
        marked
    }

    /// Mark a single entry stale; returns whether an entry was marked
    pub fn invalidate_key(&self, key: &QueryKey) -> bool {
        self.invalidate(|k| k == key) > 0
    }

    /// Mark every entry of a resource family stale
    pub fn invalidate_resource(&self, resource: &str) -> usize {
        self.invalidate(|k| k.is_resource(resource))
    }

    /// Whether the entry under `key` is present and fresh
    pub fn is_fresh(&self, key: &QueryKey) -> bool {
        self.entries.get(key).map(|e| e.is_fresh()).unwrap_or(false)
    }

    /// Whether the entry under `key` is present but refetch-eligible
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries.get(key).map(|e| !e.is_fresh()).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of activity counters
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    fn effective_ttl(&self, ttl: Duration) -> Duration {
        if !self.ttl_jitter {
            return ttl;
        }
        let jitter = (rand::random::<u32>() % 10) as f64 / 100.0;
        let jitter_secs = (ttl.as_secs_f64() * jitter).round() as u64;
        ttl + Duration::from_secs(jitter_secs)
    }
}
