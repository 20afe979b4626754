//! Cache statistics and metrics tracking
//!
//! This module provides types for tracking pattern-cache performance metrics
//! including hit rates and compile outcomes.

use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics for pattern-cache monitoring
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Current number of compiled patterns
    pub size: usize,

    /// Total number of resolves served from the cache
    pub hits: u64,

    /// Total number of resolves that did not find a compiled pattern
    pub misses: u64,

    /// Total number of successful compilations
    pub compiles: u64,

    /// Total number of failed compilations
    pub compile_failures: u64,
}

impl CacheStats {
    /// Calculate hit rate (hits / total accesses)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Calculate miss rate (misses / total accesses)
    pub fn miss_rate(&self) -> f64 {
        1.0 - self.hit_rate()
    }

    /// Total number of resolve operations (hits + misses)
    pub fn total_accesses(&self) -> u64 {
        self.hits + self.misses
    }
}

/// Thread-safe metrics collector for pattern-cache operations
///
/// Counters are atomics updated with relaxed ordering; they observe cache
/// activity without participating in the cache's own locking.
#[derive(Debug, Default)]
pub(crate) struct MetricsCollector {
    hits: AtomicU64,
    misses: AtomicU64,
    compiles: AtomicU64,
    compile_failures: AtomicU64,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache miss
    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful compilation
    pub(crate) fn record_compile(&self) {
        self.compiles.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed compilation
    pub(crate) fn record_compile_failure(&self) {
        self.compile_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current statistics snapshot
    pub(crate) fn snapshot(&self, size: usize) -> CacheStats {
        CacheStats {
            size,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            compiles: self.compiles.load(Ordering::Relaxed),
            compile_failures: self.compile_failures.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for cache stats.
    use super::*;

    /// Validates `CacheStats::default` behavior for the cache stats default
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms `stats.size` equals `0`.
    /// - Confirms `stats.hits` equals `0`.
    /// - Confirms `stats.misses` equals `0`.
    /// - Confirms `stats.compiles` equals `0`.
    /// - Confirms `stats.compile_failures` equals `0`.
    #[test]
    fn test_cache_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.size, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.compiles, 0);
        assert_eq!(stats.compile_failures, 0);
    }

    /// Validates `Default::default` behavior for the hit rate calculation
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures `(stats.hit_rate() - 0.8).abs() < 1e-10` evaluates to true.
    /// - Ensures `(stats.miss_rate() - 0.2).abs() < 1e-10` evaluates to true.
    /// - Confirms `stats.total_accesses()` equals `100`.
    #[test]
    fn test_hit_rate_calculation() {
        let stats = CacheStats { hits: 80, misses: 20, ..Default::default() };

        assert!((stats.hit_rate() - 0.8).abs() < 1e-10);
        assert!((stats.miss_rate() - 0.2).abs() < 1e-10);
        assert_eq!(stats.total_accesses(), 100);
    }

    /// Validates `CacheStats::default` behavior for the hit rate no accesses
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms `stats.hit_rate()` equals `0.0`.
    /// - Confirms `stats.miss_rate()` equals `1.0`.
    #[test]
    fn test_hit_rate_no_accesses() {
        let stats = CacheStats::default();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.miss_rate(), 1.0);
        assert_eq!(stats.total_accesses(), 0);
    }

    /// Validates `MetricsCollector::new` behavior for the metrics collector
    /// record operations scenario.
    ///
    /// Assertions:
    /// - Confirms `stats.hits` equals `1`.
    /// - Confirms `stats.misses` equals `2`.
    /// - Confirms `stats.compiles` equals `1`.
    /// - Confirms `stats.compile_failures` equals `1`.
    /// - Confirms `stats.size` equals `1`.
    #[test]
    fn test_metrics_collector_record_operations() {
        let collector = MetricsCollector::new();

        collector.record_hit();
        collector.record_miss();
        collector.record_miss();
        collector.record_compile();
        collector.record_compile_failure();

        let stats = collector.snapshot(1);

        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.compiles, 1);
        assert_eq!(stats.compile_failures, 1);
        assert_eq!(stats.size, 1);
    }

    /// Validates `Arc::new` behavior for the metrics collector thread safety
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms `stats.hits` equals `1000`.
    #[test]
    fn test_metrics_collector_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let collector = Arc::new(MetricsCollector::new());
        let mut handles = vec![];

        // Spawn 10 threads, each recording 100 hits
        for _ in 0..10 {
            let collector_clone = Arc::clone(&collector);
            let handle = thread::spawn(move || {
                for _ in 0..100 {
                    collector_clone.record_hit();
                }
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let stats = collector.snapshot(0);
        assert_eq!(stats.hits, 1000);
    }
}
