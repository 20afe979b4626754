//! Pattern catalog: the fixed key to pattern-source table.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

/// Pattern sources for the built-in masking keys
const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("APN", r"\d{4}"),
    ("EMAIL", r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"),
    ("SSN", r"\d{6}-\d{7}"),
];

static BUILTIN_CATALOG: Lazy<Arc<PatternCatalog>> =
    Lazy::new(|| Arc::new(PatternCatalog::from_entries(BUILTIN_PATTERNS.iter().copied())));

/// Immutable mapping from masking key to pattern source text.
///
/// Entries are fixed at construction and never change afterwards, so lookups
/// are read-only and need no synchronization. Keys match exactly
/// (case-sensitive).
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    entries: HashMap<String, String>,
}

impl PatternCatalog {
    /// Build a catalog from explicit (key, pattern source) entries.
    ///
    /// Entries are not compiled here; a malformed source surfaces as a
    /// compile error on the first resolve of its key.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self { entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    /// The built-in three-entry catalog: `APN`, `EMAIL`, and `SSN`.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN_CATALOG)
    }

    /// Look up the pattern source for `key`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the catalog keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_three_entries() {
        let catalog = PatternCatalog::builtin();
        assert_eq!(catalog.len(), 3);

        let mut keys: Vec<_> = catalog.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["APN", "EMAIL", "SSN"]);
    }

    #[test]
    fn lookup_unknown_key_returns_none() {
        let catalog = PatternCatalog::builtin();
        assert!(catalog.lookup("PHONE").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = PatternCatalog::builtin();
        assert!(catalog.lookup("ssn").is_none());
        assert!(catalog.lookup("Ssn").is_none());
    }

    #[test]
    fn from_entries_builds_custom_table() {
        let catalog = PatternCatalog::from_entries([("ZIP", r"\d{5}")]);
        assert_eq!(catalog.lookup("ZIP"), Some(r"\d{5}"));
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn builtin_is_shared_instance() {
        let a = PatternCatalog::builtin();
        let b = PatternCatalog::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
