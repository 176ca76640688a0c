//! In-process cache store
//!
//! A tag-aware key/value store kept in memory, optionally bounded with
//! least-recently-used eviction.

use super::types::{CacheStats, CacheStore};
use crate::error::Result;
use crate::types::JsonValue;
use lru::LruCache;
use parking_lot::Mutex;
use std::fmt;
use std::num::NonZeroUsize;

#[derive(Debug)]
struct Entry {
    value: JsonValue,
    tags: Vec<String>,
}

struct Inner {
    entries: LruCache<String, Entry>,
    stats: CacheStats,
}

/// Thread-safe in-memory [`CacheStore`]
///
/// Shareable across paginators (and threads) behind an `Arc`.
pub struct MemoryCacheStore {
    inner: Mutex<Inner>,
}

impl MemoryCacheStore {
    /// Create an unbounded store
    pub fn new() -> Self {
        Self::from_entries(LruCache::unbounded())
    }

    /// Create a store holding at most `capacity` entries
    ///
    /// A capacity of 0 yields an unbounded store.
    pub fn with_capacity(capacity: usize) -> Self {
        match NonZeroUsize::new(capacity) {
            Some(capacity) => Self::from_entries(LruCache::new(capacity)),
            None => Self::new(),
        }
    }

    fn from_entries(entries: LruCache<String, Entry>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries,
                stats: CacheStats::default(),
            }),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.inner.lock().entries.cap().get()
    }

    /// Check if `key` is stored, without touching recency or counters
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().entries.contains(key)
    }

    /// Snapshot of the hit/miss counters
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats
    }

    /// Drop every entry; counters are kept
    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryCacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("MemoryCacheStore")
            .field("len", &inner.entries.len())
            .field("capacity", &inner.entries.cap())
            .field("stats", &inner.stats)
            .finish()
    }
}

impl CacheStore for MemoryCacheStore {
    fn load(&self, key: &str) -> Result<Option<JsonValue>> {
        let mut inner = self.inner.lock();
        let value = inner.entries.get(key).map(|entry| entry.value.clone());
        if value.is_some() {
            inner.stats.hits += 1;
        } else {
            inner.stats.misses += 1;
        }
        Ok(value)
    }

    fn save(&self, key: &str, value: JsonValue, tags: &[String]) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.entries.put(
            key.to_string(),
            Entry {
                value,
                tags: tags.to_vec(),
            },
        );
        inner.stats.saves += 1;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let mut inner = self.inner.lock();
        let removed = inner.entries.pop(key).is_some();
        if removed {
            inner.stats.removals += 1;
        }
        Ok(removed)
    }

    fn ids_matching_tags(&self, tags: &[String]) -> Result<Vec<String>> {
        let inner = self.inner.lock();
        let ids = inner
            .entries
            .iter()
            .filter(|(_, entry)| tags.iter().all(|tag| entry.tags.contains(tag)))
            .map(|(key, _)| key.clone())
            .collect();
        Ok(ids)
    }
}
