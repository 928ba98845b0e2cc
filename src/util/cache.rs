//! Caller-side catalog cache with TTL, LRU eviction, and generation keys.
//!
//! The resolver never caches. Callers that want to avoid refetching wrap
//! resolution with this cache and bump the generation whenever their own
//! invalidation signal fires (new API key, account change, manual refresh).

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use crate::catalog::ResolvedCatalog;
use crate::models::canonical_provider_name;

/// TTL + LRU cache of resolved catalogs keyed by `(provider, generation)`.
#[derive(Clone)]
pub struct CatalogCache {
    inner: Arc<RwLock<CacheInner>>,
}

struct CacheInner {
    entries: HashMap<CacheKey, CacheEntry>,
    max_entries: usize,
    ttl: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    provider: String,
    generation: u64,
}

struct CacheEntry {
    value: ResolvedCatalog,
    inserted_at: Instant,
    last_accessed: Instant,
}

impl CatalogCache {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CacheInner {
                entries: HashMap::new(),
                max_entries: max_entries.max(1),
                ttl,
            })),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read(&self) -> RwLockReadGuard<'_, CacheInner> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Cached catalog for `provider` at `generation`, if present and fresh.
    pub fn get(&self, provider: &str, generation: u64) -> Option<ResolvedCatalog> {
        let key = CacheKey {
            provider: canonical_provider_name(provider).to_string(),
            generation,
        };
        let mut inner = self.write();
        let ttl = inner.ttl;

        let expired = inner.entries.get(&key).map(|e| e.inserted_at.elapsed() > ttl)?;
        if expired {
            inner.entries.remove(&key);
            return None;
        }
        let entry = inner.entries.get_mut(&key)?;
        entry.last_accessed = Instant::now();
        Some(entry.value.clone())
    }

    /// Store a catalog, dropping older generations for the same provider.
    pub fn insert(&self, generation: u64, catalog: ResolvedCatalog) {
        let key = CacheKey {
            provider: catalog.provider().to_string(),
            generation,
        };
        let mut inner = self.write();

        let ttl = inner.ttl;
        inner.entries.retain(|existing, entry| {
            entry.inserted_at.elapsed() <= ttl
                && !(existing.provider == key.provider && existing.generation < generation)
        });

        // Replacing an entry in place never needs room.
        inner.entries.remove(&key);
        if inner.entries.len() >= inner.max_entries {
            if let Some(lru_key) = inner
                .entries
                .iter()
                .min_by_key(|(_, e)| e.last_accessed)
                .map(|(k, _)| k.clone())
            {
                inner.entries.remove(&lru_key);
            }
        }

        let now = Instant::now();
        inner.entries.insert(
            key,
            CacheEntry {
                value: catalog,
                inserted_at: now,
                last_accessed: now,
            },
        );
    }

    /// Clear all entries.
    pub fn clear(&self) {
        self.write().entries.clear();
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
