//! Statistics tracking for cache operations

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Snapshot of cache activity counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub stale_hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub invalidations: u64,
    pub decode_errors: u64,
}

/// Thread-safe statistics collector
#[derive(Clone, Default)]
pub struct StatsCollector {
    hits: Arc<AtomicU64>,
    stale_hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
    insertions: Arc<AtomicU64>,
    invalidations: Arc<AtomicU64>,
    decode_errors: Arc<AtomicU64>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stale_hit(&self) {
        self.stale_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_insertion(&self) {
        self.insertions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invalidations(&self, count: u64) {
        self.invalidations.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_decode_error(&self) {
        self.decode_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current statistics snapshot
    pub fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            stale_hits: self.stale_hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            insertions: self.insertions.load(Ordering::Relaxed),
            invalidations: self.invalidations.load(Ordering::Relaxed),
            decode_errors: self.decode_errors.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.stale_hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.insertions.store(0, Ordering::Relaxed);
        self.invalidations.store(0, Ordering::Relaxed);
        self.decode_errors.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_starts_at_zero() {
        let stats = StatsCollector::new().snapshot();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.invalidations, 0);
    }

    #[test]
    fn test_collector_records_counts() {
        let collector = StatsCollector::new();
        collector.record_hit();
        collector.record_hit();
        collector.record_miss();
        collector.record_stale_hit();
        collector.record_insertion();
        collector.record_invalidations(3);

        let stats = collector.snapshot();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.stale_hits, 1);
        assert_eq!(stats.insertions, 1);
        assert_eq!(stats.invalidations, 3);
    }

    #[test]
    fn test_collector_clone_shares_counters() {
        let a = StatsCollector::new();
        a.record_hit();
        let b = a.clone();
        b.record_hit();
        assert_eq!(a.snapshot().hits, 2);
    }

    #[test]
    fn test_collector_reset() {
        let collector = StatsCollector::new();
        collector.record_hit();
        collector.record_insertion();
        collector.reset();
        let stats = collector.snapshot();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.insertions, 0);
    }

    #[test]
    fn test_stats_serialization() {
        let stats = CacheStats {
            hits: 10,
            stale_hits: 2,
            misses: 5,
            insertions: 7,
            invalidations: 4,
            decode_errors: 0,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: CacheStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back.hits, 10);
        assert_eq!(back.invalidations, 4);
    }
}
