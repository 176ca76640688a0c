//! Cache store abstraction
//!
//! The paginator talks to its cache through this narrow trait so that any
//! key/value backend with tag support can hold page items.

use crate::error::Result;
use crate::types::JsonValue;
use std::fmt;

/// Key/value store with tag-based lookup
///
/// Values are page item sequences encoded as JSON. No ordering or
/// transactional guarantees are required of implementations; the paginator
/// tolerates concurrent writers recomputing the same entry.
pub trait CacheStore: Send + Sync + fmt::Debug {
    /// Load the value stored under `key`, `None` when absent
    fn load(&self, key: &str) -> Result<Option<JsonValue>>;

    /// Store `value` under `key`, replacing any previous value and tags
    fn save(&self, key: &str, value: JsonValue, tags: &[String]) -> Result<()>;

    /// Remove `key`, returning whether it was present
    fn remove(&self, key: &str) -> Result<bool>;

    /// Keys carrying every tag in `tags`
    fn ids_matching_tags(&self, tags: &[String]) -> Result<Vec<String>>;
}

/// Counters reported by [`MemoryCacheStore`](super::MemoryCacheStore)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Loads that found a value
    pub hits: u64,
    /// Loads that found nothing
    pub misses: u64,
    /// Values written
    pub saves: u64,
    /// Keys removed
    pub removals: u64,
}

impl CacheStats {
    /// Fraction of loads that were hits, 0.0 when nothing was loaded
    pub fn hit_rate(&self) -> f64 {
        let loads = self.hits + self.misses;
        if loads == 0 {
            0.0
        } else {
            self.hits as f64 / loads as f64
        }
    }
}
