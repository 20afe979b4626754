//! Scope lifecycle hooks.
//!
//! The host invokes these once per execution scope, around any number of
//! masking calls: prepare allocates the scope's pattern cache, close releases
//! it. Both are safe under repeated or out-of-order invocation.

use std::sync::Arc;

use rowmask_core::{CacheStats, PatternCache, PatternCatalog};
use tracing::{debug, instrument, warn};

use crate::context::{ScopeContext, ScopeStatus};

/// Prepares `context` with a pattern cache over the built-in catalog.
///
/// Idempotent: a prepared scope keeps its existing cache. A closed scope
/// stays closed; the request is logged and ignored.
#[instrument(skip(context))]
pub fn prepare_scope(context: &ScopeContext) {
    prepare_scope_with_catalog(context, PatternCatalog::builtin());
}

/// Prepares `context` with a pattern cache over a caller-supplied catalog.
///
/// Same transitions as [`prepare_scope`]; used directly where the scope
/// should serve keys outside the built-in table.
#[instrument(skip(context, catalog))]
pub fn prepare_scope_with_catalog(context: &ScopeContext, catalog: Arc<PatternCatalog>) {
    let cache = Arc::new(PatternCache::new(catalog));
    match context.install_state(cache) {
        ScopeStatus::NotPrepared => {
            debug!(scope_id = %context.scope_id(), "scope prepared");
        }
        ScopeStatus::Prepared => {
            debug!(scope_id = %context.scope_id(), "scope already prepared, keeping cache");
        }
        ScopeStatus::Closed => {
            warn!(scope_id = %context.scope_id(), "prepare requested on a closed scope, ignoring");
        }
    }
}

/// Point-in-time cache counters for a prepared scope.
///
/// Returns `None` unless the scope is currently prepared.
pub fn scope_stats(context: &ScopeContext) -> Option<CacheStats> {
    context.prepared_state::<PatternCache>().ok().map(|cache| cache.stats())
}

/// Closes `context`, releasing the scope's pattern cache.
///
/// Safe on a scope that was never prepared and on a scope already closed;
/// `Closed` is terminal either way. The cache's final counters are logged
/// before the release.
#[instrument(skip(context))]
pub fn close_scope(context: &ScopeContext) {
    let (prior, slot) = context.close();
    match prior {
        ScopeStatus::Prepared => {
            if let Some(cache) = slot.and_then(|state| state.downcast::<PatternCache>().ok()) {
                let stats = cache.stats();
                debug!(
                    scope_id = %context.scope_id(),
                    hits = stats.hits,
                    misses = stats.misses,
                    compiles = stats.compiles,
                    compile_failures = stats.compile_failures,
                    "scope closed, cache released"
                );
            }
        }
        ScopeStatus::NotPrepared => {
            debug!(scope_id = %context.scope_id(), "scope closed without preparation");
        }
        ScopeStatus::Closed => {
            debug!(scope_id = %context.scope_id(), "scope already closed");
        }
    }
}
