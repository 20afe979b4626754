//! Compiled-pattern cache bound to one execution scope.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use regex::Regex;
use tracing::{debug, warn};

use crate::catalog::PatternCatalog;
use crate::error::MaskError;
use crate::stats::{CacheStats, MetricsCollector};

/// Thread-safe store of compiled patterns for one execution scope.
///
/// Patterns compile lazily from the catalog on first use. One mutex guards
/// the map for the whole lookup-or-compile-and-insert sequence, so concurrent
/// misses on the same key produce exactly one compiled matcher. The same lock
/// serializes compilation of different keys; with a small fixed catalog each
/// key compiles at most once per scope, so that window is bounded.
#[derive(Debug)]
pub struct PatternCache {
    catalog: Arc<PatternCatalog>,
    compiled: Mutex<HashMap<String, Arc<Regex>>>,
    metrics: MetricsCollector,
}

impl PatternCache {
    /// Create a cache that compiles from the given catalog.
    pub fn new(catalog: Arc<PatternCatalog>) -> Self {
        Self { catalog, compiled: Mutex::new(HashMap::new()), metrics: MetricsCollector::new() }
    }

    /// Create a cache over the built-in catalog.
    pub fn with_builtin() -> Self {
        Self::new(PatternCatalog::builtin())
    }

    /// Resolve `key` to its compiled pattern, compiling on first use.
    ///
    /// The returned handle refers to the single instance the cache owns for
    /// the rest of its lifetime; it is never a second compilation of the same
    /// key. A failed compilation is not recorded, so the next resolve of the
    /// same key retries it.
    pub fn resolve(&self, key: &str) -> Result<Arc<Regex>, MaskError> {
        let mut compiled = self.compiled.lock();

        if let Some(pattern) = compiled.get(key) {
            self.metrics.record_hit();
            return Ok(Arc::clone(pattern));
        }
        self.metrics.record_miss();

        let source = match self.catalog.lookup(key) {
            Some(source) => source,
            None => return Err(MaskError::UnknownKey(key.to_string())),
        };

        // The lock stays held through compilation so two concurrent misses on
        // one key cannot both compile and insert.
        match Regex::new(source) {
            Ok(pattern) => {
                self.metrics.record_compile();
                debug!(key, "compiled masking pattern");
                let pattern = Arc::new(pattern);
                compiled.insert(key.to_string(), Arc::clone(&pattern));
                Ok(pattern)
            }
            Err(err) => {
                self.metrics.record_compile_failure();
                warn!(key, error = %err, "masking pattern failed to compile");
                Err(MaskError::PatternCompile { key: key.to_string(), message: err.to_string() })
            }
        }
    }

    /// Number of compiled patterns currently held.
    pub fn len(&self) -> usize {
        self.compiled.lock().len()
    }

    /// Whether no pattern has been compiled yet.
    pub fn is_empty(&self) -> bool {
        self.compiled.lock().is_empty()
    }

    /// Point-in-time statistics snapshot.
    pub fn stats(&self) -> CacheStats {
        self.metrics.snapshot(self.compiled.lock().len())
    }
}
